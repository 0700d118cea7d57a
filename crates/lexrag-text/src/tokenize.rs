use std::collections::HashSet;

use lexrag_core::config::TokenizerConfig;

pub const STOP_WORDS: &[&str] = &[
	"a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
];

/// Case-insensitive word tokenizer shared by index build and query time.
///
/// Tokens are maximal runs of alphanumeric characters, lower-cased; all
/// other characters act as separators and are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
	min_token_len: usize,
	stop_words: HashSet<&'static str>,
}

impl Default for Tokenizer {
	fn default() -> Self { Self::new(&TokenizerConfig::default()) }
}

impl Tokenizer {
	pub fn new(config: &TokenizerConfig) -> Self {
		let stop_words = if config.stop_words { STOP_WORDS.iter().copied().collect() } else { HashSet::new() };
		Self { min_token_len: config.min_token_len, stop_words }
	}

	pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
		text.split(|c: char| !c.is_alphanumeric())
			.filter(|s| !s.is_empty())
			.map(str::to_lowercase)
			.filter(move |t| t.chars().count() >= self.min_token_len)
			.filter(move |t| !self.stop_words.contains(t.as_str()))
	}
}
