//! Prompts domain module.
//!
//! Prompts are named templates on the server that return guided, multi-step
//! instructions for the model. This module knows each prompt's arguments,
//! builds `get_prompt` requests and can preview the messages the server
//! would send back.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration
//! - `service.rs` - Checked requests and message previews
//! - `templates.rs` - Template rendering engine

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::PromptService;
pub use templates::{MessageTemplate, PromptTemplate};
