//! Core module containing shared infrastructure components.
//!
//! This module provides the request and response envelopes, the client
//! facade that ties the domain catalogs together, configuration, error
//! handling and the output layer.

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod request;
pub mod response;

pub use client::McpClient;
pub use config::Config;
pub use error::{Error, Result};
pub use output::{ExampleWriter, OutputConfig, OutputFormat};
pub use request::McpRequest;
