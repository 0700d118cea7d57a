//! lexrag-prompt
//!
//! Turns ranked chunks into the context prompt that is forwarded to a
//! remote model, and bundles a frozen index with search settings behind a
//! [`Retriever`].
pub mod prompt;
pub mod retriever;

pub use prompt::compose_prompt;
pub use retriever::Retriever;
