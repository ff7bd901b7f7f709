//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur while addressing resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The URI is not of the form `<scheme>://<kind>/<id>`.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The URI uses a scheme other than `audius`.
    #[error("Unsupported scheme '{scheme}' in {uri}")]
    UnsupportedScheme { scheme: String, uri: String },

    /// The resource kind is not one the server serves.
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),
}

impl ResourceError {
    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "unsupported scheme" error.
    pub fn unsupported_scheme(scheme: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.into(),
            uri: uri.into(),
        }
    }

    /// Create a new "unknown kind" error.
    pub fn unknown_kind(kind: impl Into<String>) -> Self {
        Self::UnknownKind(kind.into())
    }
}
