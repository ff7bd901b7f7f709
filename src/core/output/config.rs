//! Output configuration types.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use super::OutputError;

/// How JSON payloads are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-space indented JSON.
    #[default]
    Pretty,

    /// Single-line JSON.
    Compact,
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(OutputError::invalid_format(other)),
        }
    }
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendering of JSON payloads.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print every request a scenario builds, not only the headline ones.
    #[serde(default)]
    pub show_all_requests: bool,
}

impl OutputConfig {
    /// Load output config through a variable lookup.
    ///
    /// Reads `MCP_OUTPUT_FORMAT` and `MCP_SHOW_ALL_REQUESTS`; bad values are
    /// logged and replaced by the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(format) = lookup("MCP_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(format) => config.format = format,
                Err(e) => warn!("{}, using {:?}", e, config.format),
            }
        }

        if let Some(show_all) = lookup("MCP_SHOW_ALL_REQUESTS") {
            config.show_all_requests = show_all.to_lowercase() == "true" || show_all == "1";
        }

        config
    }

    /// Get a description of this output mode for logging.
    pub fn description(&self) -> String {
        let format = match self.format {
            OutputFormat::Pretty => "pretty JSON",
            OutputFormat::Compact => "compact JSON",
        };
        if self.show_all_requests {
            format!("{}, all requests", format)
        } else {
            format.to_string()
        }
    }
}
