//! Splits document text into fixed-size, optionally overlapping chunks.
//!
//! Every chunk is an exact slice of the source text. With `overlap == 0`
//! the chunks tile the text, so concatenating them in order gives the
//! original back.
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Chunk, Document};

/// What `size` and `overlap` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Whitespace-delimited words, each carrying its trailing whitespace.
    Words,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    pub size: usize,
    pub overlap: usize,
    pub unit: ChunkUnit,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self { size: 1000, overlap: 0, unit: ChunkUnit::Chars }
    }
}

impl ChunkingConfig {
    pub fn chars(size: usize, overlap: usize) -> Self {
        Self { size, overlap, unit: ChunkUnit::Chars }
    }

    pub fn words(size: usize, overlap: usize) -> Self {
        Self { size, overlap, unit: ChunkUnit::Words }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(self.invalid("chunk size must be positive"));
        }
        if self.overlap >= self.size {
            return Err(self.invalid("overlap must be smaller than chunk size"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &'static str) -> Error {
        Error::InvalidChunking { size: self.size, overlap: self.overlap, reason }
    }
}

#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    /// Fails fast on a zero size or an overlap that would stop the window
    /// from advancing.
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Byte ranges of each chunk of `text`, in order.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        if text.is_empty() {
            return Vec::new();
        }
        let starts = match self.config.unit {
            ChunkUnit::Chars => text.char_indices().map(|(i, _)| i).collect(),
            ChunkUnit::Words => word_starts(text),
        };
        let unit_count = starts.len();
        let step = self.config.size - self.config.overlap;
        let mut spans = Vec::new();
        let mut first = 0;
        loop {
            let last = (first + self.config.size).min(unit_count);
            let end = if last == unit_count { text.len() } else { starts[last] };
            spans.push(starts[first]..end);
            if last == unit_count {
                break;
            }
            first += step;
        }
        spans
    }

    /// Chunk texts of `text`, borrowed.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.spans(text).into_iter().map(|r| &text[r]).collect()
    }

    /// Chunks of a single document with ordinals starting at zero.
    pub fn chunk_document(&self, document: &Document) -> Vec<Chunk> {
        self.chunk_document_from(document, 0)
    }

    /// Chunks of several documents as one corpus; ordinals run across
    /// document boundaries in input order.
    pub fn chunk_documents(&self, documents: &[Document]) -> Vec<Chunk> {
        let mut all_chunks = Vec::new();
        for document in documents {
            let chunks = self.chunk_document_from(document, all_chunks.len());
            all_chunks.extend(chunks);
        }
        debug!(documents = documents.len(), chunks = all_chunks.len(), "chunked corpus");
        all_chunks
    }

    fn chunk_document_from(&self, document: &Document, first_ordinal: usize) -> Vec<Chunk> {
        self.spans(&document.text)
            .into_iter()
            .enumerate()
            .map(|(chunk_index, span)| Chunk {
                id: format!("{}#{}", document.source, chunk_index),
                ordinal: first_ordinal + chunk_index,
                source: document.source.clone(),
                chunk_index,
                offset: span.start,
                content: document.text[span].to_string(),
            })
            .collect()
    }
}

/// Start offsets of word segments. Leading whitespace belongs to the first
/// segment and trailing whitespace to the word before it, so the segments
/// tile `text`. Whitespace-only text is one segment.
fn word_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut seen_word = false;
    let mut prev_is_space = true;
    for (i, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        if !is_space && prev_is_space {
            if seen_word {
                starts.push(i);
            }
            seen_word = true;
        }
        prev_is_space = is_space;
    }
    starts
}
