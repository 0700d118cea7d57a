use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid chunking parameters (size={size}, overlap={overlap}): {reason}")]
    InvalidChunking {
        size: usize,
        overlap: usize,
        reason: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
