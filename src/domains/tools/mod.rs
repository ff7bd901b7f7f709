//! Tools domain module.
//!
//! Tools are named actions the Audius MCP server exposes. This module does
//! not run them; it knows their names, their parameter shapes and how to
//! wrap parameters into a `call_tool` request.
//!
//! ## Architecture
//!
//! - `definitions/` - Typed parameters and metadata, grouped by area
//! - `registry.rs` - Tool catalog and checked dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct and a `ToolDefinition` impl in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `registry.rs`

pub mod definitions;
mod error;
mod registry;

pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
