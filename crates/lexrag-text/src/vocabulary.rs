use std::collections::{BTreeSet, HashMap, HashSet};

pub type TermId = u32;

/// Normalized term -> dimension index. Ids follow lexicographic term order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
	terms: Vec<String>,
	ids: HashMap<String, TermId>,
}

impl From<Vec<String>> for Vocabulary {
	fn from(terms: Vec<String>) -> Self {
		let ids = terms.iter().enumerate().map(|(i, t)| (t.clone(), i as TermId)).collect();
		Self { terms, ids }
	}
}

impl Vocabulary {
	pub fn id(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

	pub fn term(&self, id: TermId) -> Option<&str> { self.terms.get(id as usize).map(String::as_str) }

	pub fn contains(&self, term: &str) -> bool { self.ids.contains_key(term) }

	pub fn len(&self) -> usize { self.terms.len() }

	pub fn is_empty(&self) -> bool { self.terms.is_empty() }

	/// `(id, term)` pairs in id order.
	pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> {
		self.terms.iter().enumerate().map(|(i, t)| (i as TermId, t.as_str()))
	}
}

/// Per-term document frequency and IDF weight, indexed by `TermId`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights {
	num_chunks: usize,
	doc_freq: Vec<u32>,
	idf: Vec<f32>,
}

impl TermWeights {
	pub fn num_chunks(&self) -> usize { self.num_chunks }

	pub fn doc_freq(&self, id: TermId) -> Option<u32> { self.doc_freq.get(id as usize).copied() }

	pub fn idf(&self, id: TermId) -> Option<f32> { self.idf.get(id as usize).copied() }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// Strictly positive and strictly decreasing in `df` for `df <= n`.
pub fn smoothed_idf(num_chunks: usize, doc_freq: usize) -> f32 {
	(((1 + num_chunks) as f64 / (1 + doc_freq) as f64).ln() + 1.0) as f32
}

/// Builds the vocabulary and term statistics from per-chunk token lists.
pub fn build_term_statistics(chunk_tokens: &[Vec<String>]) -> (Vocabulary, TermWeights) {
	let terms: BTreeSet<&str> = chunk_tokens.iter().flatten().map(String::as_str).collect();
	let vocabulary = Vocabulary::from(terms.into_iter().map(str::to_string).collect::<Vec<_>>());

	let mut doc_freq = vec![0u32; vocabulary.len()];
	for tokens in chunk_tokens {
		let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
		for term in distinct {
			if let Some(id) = vocabulary.id(term) { doc_freq[id as usize] += 1; }
		}
	}

	let num_chunks = chunk_tokens.len();
	let idf = doc_freq.iter().map(|&df| smoothed_idf(num_chunks, df as usize)).collect();
	(vocabulary, TermWeights { num_chunks, doc_freq, idf })
}
