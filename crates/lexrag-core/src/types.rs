//! Domain types shared by the chunker, the TF-IDF engine and prompt composition.

use serde::{Deserialize, Serialize};

pub type ChunkId = String;

/// Raw text of one source document.
///
/// `source` is whatever the loader used to find the text (a path or URL).
/// Documents are never modified after ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub source: String,
    pub text: String,
}

impl Document {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self { source: source.into(), text: text.into() }
    }
}

/// A contiguous span of a source document that is independently indexed.
///
/// - `id`: `"{source}#{chunk_index}"`, unique within a corpus
/// - `ordinal`: position in the corpus-wide chunk sequence; breaks score ties
/// - `source`: the parent document's source reference
/// - `chunk_index`: position within the parent document
/// - `offset`: byte offset of `content` in the parent document text
/// - `content`: the text payload, an exact slice of the parent text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub ordinal: usize,
    pub source: String,
    pub chunk_index: usize,
    pub offset: usize,
    pub content: String,
}

/// One entry of a ranked result: a chunk of the index and its cosine score.
///
/// Borrowed from the index that produced it. Higher is better; never negative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SearchHit<'a> {
    pub chunk: &'a Chunk,
    pub score: f32,
}
