//! Output error types.

use thiserror::Error;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors that can occur while writing examples.
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error on the underlying writer.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A payload could not be serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unrecognized output format name.
    #[error("Unknown output format: {0}")]
    InvalidFormat(String),
}

impl OutputError {
    /// Create an invalid format error.
    pub fn invalid_format(name: impl Into<String>) -> Self {
        Self::InvalidFormat(name.into())
    }
}
