use serde::Serialize;
use tracing::debug;

use lexrag_core::chunker::Chunker;
use lexrag_core::config::TokenizerConfig;
use lexrag_core::types::{Chunk, Document};

use crate::tokenize::Tokenizer;
use crate::vector::SparseVector;
use crate::vocabulary::{build_term_statistics, TermWeights, Vocabulary};

/// Frozen TF-IDF index over one corpus.
///
/// Holds the tokenizer, vocabulary and term weights used at build time so
/// queries land in the same vector space. There is no incremental update:
/// a changed corpus means building a new index.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
	tokenizer: Tokenizer,
	vocabulary: Vocabulary,
	weights: TermWeights,
	chunks: Vec<Chunk>,
	vectors: Vec<SparseVector>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
	pub chunks: usize,
	pub terms: usize,
	pub avg_terms_per_chunk: f32,
}

impl TfIdfIndex {
	/// Builds from chunks already in corpus order. An empty corpus gives an
	/// empty, queryable index.
	pub fn build(chunks: Vec<Chunk>, tokenizer_config: &TokenizerConfig) -> Self {
		let tokenizer = Tokenizer::new(tokenizer_config);
		let chunk_tokens: Vec<Vec<String>> = chunks.iter().map(|c| tokenizer.tokenize(&c.content).collect()).collect();
		let (vocabulary, weights) = build_term_statistics(&chunk_tokens);
		let vectors = chunk_tokens.iter().map(|tokens| SparseVector::from_tokens(tokens, &vocabulary, &weights)).collect();
		let index = Self { tokenizer, vocabulary, weights, chunks, vectors };
		debug!(chunks = index.len(), terms = index.vocabulary.len(), "built tf-idf index");
		index
	}

	/// Chunks every document with `chunker` and builds one index over all of them.
	pub fn from_documents(documents: &[Document], chunker: &Chunker, tokenizer_config: &TokenizerConfig) -> Self {
		Self::build(chunker.chunk_documents(documents), tokenizer_config)
	}

	/// Projects `query` into this index's vector space.
	pub fn embed_query(&self, query: &str) -> SparseVector {
		SparseVector::from_tokens(self.tokenizer.tokenize(query), &self.vocabulary, &self.weights)
	}

	pub fn tokenizer(&self) -> &Tokenizer { &self.tokenizer }

	pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

	pub fn weights(&self) -> &TermWeights { &self.weights }

	pub fn chunks(&self) -> &[Chunk] { &self.chunks }

	pub fn vectors(&self) -> &[SparseVector] { &self.vectors }

	pub fn len(&self) -> usize { self.chunks.len() }

	pub fn is_empty(&self) -> bool { self.chunks.is_empty() }

	pub fn stats(&self) -> IndexStats {
		let total: usize = self.vectors.iter().map(SparseVector::nnz).sum();
		let avg_terms_per_chunk = if self.is_empty() { 0.0 } else { total as f32 / self.len() as f32 };
		IndexStats { chunks: self.len(), terms: self.vocabulary.len(), avg_terms_per_chunk }
	}
}
