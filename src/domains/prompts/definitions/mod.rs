//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (name, description, arguments)
//! - Typed arguments
//! - Message templates
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod artist_profile;

pub use artist_profile::{ArtistProfileArgs, ArtistProfilePrompt};

use rmcp::model::PromptArgument;
use serde::Serialize;

use super::PromptError;
use super::templates::MessageTemplate;
use crate::core::request::{self, McpRequest};

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Typed arguments.
    type Args: Serialize;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;

    /// Message templates with {{variable}} placeholders, in order.
    fn messages() -> Vec<MessageTemplate>;

    /// Build the `get_prompt` request for `args`.
    fn request(args: &Self::Args) -> Result<McpRequest, PromptError> {
        let arguments = serde_json::to_value(args)
            .map_err(|e| PromptError::invalid_argument(Self::NAME, e.to_string()))?;
        Ok(request::get_prompt(Self::NAME, arguments))
    }
}
