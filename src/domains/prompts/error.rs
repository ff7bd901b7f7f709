//! Prompt-specific error types.

use thiserror::Error;

/// Errors raised while checking prompt arguments or rendering previews.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No prompt is registered under this name.
    #[error("Prompt not found: {0}")]
    NotFound(String),

    /// A required prompt argument was not supplied.
    #[error("Prompt '{prompt}' requires argument '{argument}'")]
    MissingArgument { prompt: String, argument: String },

    /// An argument value the template cannot use.
    #[error("Invalid value for argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Malformed `{{#if}}` block in a message template.
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl PromptError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn missing_argument(prompt: impl Into<String>, argument: impl Into<String>) -> Self {
        Self::MissingArgument {
            prompt: prompt.into(),
            argument: argument.into(),
        }
    }

    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::TemplateError(msg.into())
    }
}
