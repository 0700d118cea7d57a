//! Sparse TF-IDF vectors and cosine similarity.
use std::collections::BTreeMap;

use crate::vocabulary::{TermId, TermWeights, Vocabulary};

/// Non-zero `(term id, weight)` entries sorted by term id, with the L2
/// norm computed once at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
	entries: Vec<(TermId, f32)>,
	norm: f32,
}

impl SparseVector {
	/// Raw term count times IDF per dimension. Tokens outside the
	/// vocabulary contribute nothing.
	pub fn from_tokens<I, S>(tokens: I, vocabulary: &Vocabulary, weights: &TermWeights) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut counts: BTreeMap<TermId, u32> = BTreeMap::new();
		for token in tokens {
			if let Some(id) = vocabulary.id(token.as_ref()) { *counts.entry(id).or_insert(0) += 1; }
		}
		let entries = counts
			.into_iter()
			.filter_map(|(id, tf)| weights.idf(id).map(|idf| (id, tf as f32 * idf)))
			.collect();
		Self::from_sorted_entries(entries)
	}

	fn from_sorted_entries(entries: Vec<(TermId, f32)>) -> Self {
		let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
		Self { entries, norm }
	}

	pub fn entries(&self) -> &[(TermId, f32)] { &self.entries }

	pub fn get(&self, id: TermId) -> f32 {
		self.entries.binary_search_by_key(&id, |(i, _)| *i).map(|pos| self.entries[pos].1).unwrap_or(0.0)
	}

	pub fn nnz(&self) -> usize { self.entries.len() }

	pub fn norm(&self) -> f32 { self.norm }

	pub fn is_zero(&self) -> bool { self.norm == 0.0 }

	pub fn dot(&self, other: &SparseVector) -> f32 {
		let (mut i, mut j, mut sum) = (0, 0, 0.0f32);
		while i < self.entries.len() && j < other.entries.len() {
			let (a_id, a_w) = self.entries[i];
			let (b_id, b_w) = other.entries[j];
			match a_id.cmp(&b_id) {
				std::cmp::Ordering::Less => i += 1,
				std::cmp::Ordering::Greater => j += 1,
				std::cmp::Ordering::Equal => { sum += a_w * b_w; i += 1; j += 1; }
			}
		}
		sum
	}

	/// Cosine similarity; zero when either vector has zero magnitude.
	pub fn cosine(&self, other: &SparseVector) -> f32 {
		if self.is_zero() || other.is_zero() { return 0.0; }
		self.dot(other) / (self.norm * other.norm)
	}
}
