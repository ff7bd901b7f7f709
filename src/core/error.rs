//! Error types and handling for the example client.
//!
//! The request builders themselves cannot fail. Errors come from the layers
//! around them: typed arguments, URI parsing, registry lookups, configuration
//! and writing output. This module unifies them into one type.

use thiserror::Error;

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error while writing examples.
    #[error("Output error: {0}")]
    Output(#[from] super::output::OutputError),

    /// A scenario name that is not registered.
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new unknown scenario error.
    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        Self::UnknownScenario(name.into())
    }
}
