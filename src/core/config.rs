//! Configuration management for the example client.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a dotenv file, or defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use super::error::{Error, Result};
use super::output::OutputConfig;

/// Default address of the MCP server the examples are written against.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Target server identification.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// How examples are printed.
    pub output: OutputConfig,
}

/// The MCP server the example requests are addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Display name of the server.
    pub name: String,

    /// Base URL of the server. Reported only; never contacted.
    pub url: String,

    /// Version of this client.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "audius-mcp".to_string(),
                url: DEFAULT_SERVER_URL.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "warn".to_string(),
                with_timestamps: false,
            },
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// Variables are prefixed with `MCP_`, e.g. `MCP_SERVER_URL`,
    /// `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a dotenv file without touching the process
    /// environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let vars = dotenvy::from_path_iter(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;

        Ok(Self::from_lookup(|key| vars.get(key).cloned()))
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Some(url) = lookup("MCP_SERVER_URL") {
            let url = url.trim_end_matches('/').to_string();
            if url.starts_with("http://") || url.starts_with("https://") {
                config.server.url = url;
            } else {
                warn!(
                    "MCP_SERVER_URL '{}' is not an http(s) URL, keeping {}",
                    url, config.server.url
                );
            }
        }

        if let Some(level) = lookup("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(timestamps) = lookup("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(false);
        }

        config.output = OutputConfig::from_lookup(&lookup);

        config
    }
}
