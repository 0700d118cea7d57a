#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod chunker;
pub mod config;
pub mod error;
pub mod loader;
pub mod types;

pub use chunker::{ChunkUnit, Chunker, ChunkingConfig};
pub use config::{Config, PromptConfig, SearchConfig, Settings, TokenizerConfig};
pub use error::{Error, Result};
pub use types::{Chunk, ChunkId, Document, SearchHit};
