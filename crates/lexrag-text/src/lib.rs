//! lexrag-text
//!
//! TF-IDF indexing and cosine ranking over chunked text. Build a
//! [`TfIdfIndex`] once per corpus, then call [`search`] per query.
pub mod index;
pub mod search;
pub mod tokenize;
pub mod vector;
pub mod vocabulary;

pub use index::{IndexStats, TfIdfIndex};
pub use search::{score_all, search};
pub use tokenize::Tokenizer;
pub use vector::SparseVector;
pub use vocabulary::{smoothed_idf, TermId, TermWeights, Vocabulary};
