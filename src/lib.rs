//! Audius MCP Examples Library
//!
//! This crate shows how an LLM client talks to the Audius MCP server: which
//! requests to build, in which order, and what the server answers. Requests
//! are printed, never sent.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, request/response shapes, the
//!   client facade and the output writer
//! - **domains**: the Audius capabilities, organized by bounded contexts
//!   - **tools**: typed parameters for every tool the server exposes
//!   - **resources**: `audius://` resource URIs and templates
//!   - **prompts**: guided prompt templates
//!   - **scenarios**: scripted walkthroughs and their runner
//!
//! # Example
//!
//! ```rust,no_run
//! use audius_mcp_examples::{Config, McpClient};
//! use audius_mcp_examples::core::{ExampleWriter, OutputFormat};
//! use audius_mcp_examples::domains::scenarios::{ScenarioRunner, default_scenarios};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = McpClient::new(Config::from_env());
//!     let mut writer = ExampleWriter::new(tokio::io::stdout(), OutputFormat::Pretty);
//!     ScenarioRunner::new(client)
//!         .run(&default_scenarios(), &mut writer)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpClient, McpRequest, Result};
