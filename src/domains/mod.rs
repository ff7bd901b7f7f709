//! Domains module containing the example logic organized by bounded contexts.
//!
//! Each subdomain covers one MCP capability of the Audius server (tools,
//! resources, prompts) plus the scripted scenarios that exercise them.

pub mod prompts;
pub mod resources;
pub mod scenarios;
pub mod tools;
