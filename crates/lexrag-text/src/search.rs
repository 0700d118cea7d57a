use std::cmp::Ordering;
use tracing::debug;

use lexrag_core::config::SearchConfig;
use lexrag_core::types::SearchHit;

use crate::index::TfIdfIndex;

/// Cosine score of `query` against every chunk, in chunk order.
pub fn score_all(index: &TfIdfIndex, query: &str) -> Vec<f32> {
	let query_vec = index.embed_query(query);
	index.vectors().iter().map(|v| query_vec.cosine(v)).collect()
}

/// Top `options.top_k` chunks by descending score; equal scores go to the
/// lowest `Chunk::ordinal`. Hits below `options.min_score` are dropped; a NaN
/// threshold drops nothing.
pub fn search<'a>(index: &'a TfIdfIndex, query: &str, options: &SearchConfig) -> Vec<SearchHit<'a>> {
	let scores = score_all(index, query);
	let chunks = index.chunks();
	let mut ranked: Vec<(usize, f32)> = scores.into_iter().enumerate().filter(|(_, s)| options.min_score.is_nan() || *s >= options.min_score).collect();
	ranked.sort_by(|a, b| {
		b.1.partial_cmp(&a.1)
			.unwrap_or(Ordering::Equal)
			.then(chunks[a.0].ordinal.cmp(&chunks[b.0].ordinal))
			.then(a.0.cmp(&b.0))
	});
	ranked.truncate(options.top_k);
	debug!(query, chunks = index.len(), hits = ranked.len(), "ranked chunks");
	ranked.into_iter().map(|(i, score)| SearchHit { chunk: &chunks[i], score }).collect()
}

impl TfIdfIndex {
	/// Top `k` chunks for `query` with no score threshold.
	pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit<'_>> {
		search(self, query, &SearchConfig::top_k(k))
	}

	pub fn search_with(&self, query: &str, options: &SearchConfig) -> Vec<SearchHit<'_>> {
		search(self, query, options)
	}
}
