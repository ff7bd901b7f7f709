//! Client facade over the request builders and domain catalogs.
//!
//! `McpClient` is what scenarios talk to. It hands out requests addressed to
//! the configured server and exposes the tool, prompt and resource catalogs
//! as JSON listings. Requests are returned to the caller, never sent.

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::config::Config;
use super::error::Result;
use super::request::{self, McpRequest};
use crate::domains::{
    prompts::{PromptDefinition, PromptService},
    resources::{ResourceUri, get_all_resource_templates},
    tools::{ToolDefinition, ToolRegistry},
};
use crate::core::response::PromptResponse;

/// The example MCP client.
#[derive(Clone)]
pub struct McpClient {
    /// Client configuration.
    config: Arc<Config>,

    /// Catalog of known tools.
    tools: Arc<ToolRegistry>,

    /// Catalog of known prompts.
    prompts: Arc<PromptService>,
}

impl McpClient {
    /// Create a new client with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tools: Arc::new(ToolRegistry::new()),
            prompts: Arc::new(PromptService::new()),
        }
    }

    /// Name of the target server.
    pub fn server_name(&self) -> &str {
        &self.config.server.name
    }

    /// Base URL the requests are addressed to.
    pub fn server_url(&self) -> &str {
        &self.config.server.url
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    // ========================================================================
    // Request builders
    // ========================================================================

    /// Build a `call_tool` request without checking it against the catalog.
    pub fn call_tool(&self, name: &str, arguments: Value) -> McpRequest {
        debug!("Building call_tool request for {}", name);
        if !self.tools.contains(name) {
            debug!("{} is not in the tool catalog", name);
        }
        request::call_tool(name, arguments)
    }

    /// Build a `call_tool` request from typed params.
    pub fn tool<T: ToolDefinition>(&self, params: &T::Params) -> Result<McpRequest> {
        debug!("Building call_tool request for {}", T::NAME);
        Ok(T::request(params)?)
    }

    /// Build a `call_tool` request, checking the name and arguments against
    /// the catalog.
    #[instrument(skip(self, arguments))]
    pub fn call_tool_checked(&self, name: &str, arguments: Value) -> Result<McpRequest> {
        Ok(self.tools.call_tool(name, arguments)?)
    }

    /// Build a `get_prompt` request without checking it against the catalog.
    pub fn get_prompt(&self, name: &str, arguments: Value) -> McpRequest {
        debug!("Building get_prompt request for {}", name);
        request::get_prompt(name, arguments)
    }

    /// Build a `get_prompt` request from typed arguments.
    pub fn prompt<P: PromptDefinition>(&self, args: &P::Args) -> Result<McpRequest> {
        debug!("Building get_prompt request for {}", P::NAME);
        Ok(P::request(args)?)
    }

    /// Build a `get_prompt` request, checking required arguments.
    #[instrument(skip(self, arguments))]
    pub fn get_prompt_checked(&self, name: &str, arguments: Value) -> Result<McpRequest> {
        Ok(self.prompts.get_prompt(name, arguments)?)
    }

    /// Render the messages the server would return for a prompt.
    pub fn preview_prompt(&self, name: &str, arguments: &Value) -> Result<PromptResponse> {
        Ok(self.prompts.preview(name, arguments)?)
    }

    /// Build a `read_resource` request for any URI string.
    pub fn read_resource(&self, uri: &str) -> McpRequest {
        debug!("Building read_resource request for {}", uri);
        request::read_resource(uri)
    }

    /// Build a `read_resource` request after parsing the URI.
    pub fn read_resource_checked(&self, uri: &str) -> Result<McpRequest> {
        let uri: ResourceUri = uri.parse()?;
        Ok(uri.read_request())
    }

    // ========================================================================
    // Catalog listings
    // ========================================================================

    /// List all known tools.
    pub fn list_tools(&self) -> Vec<Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// List all known prompts.
    pub fn list_prompts(&self) -> Vec<Value> {
        self.prompts
            .list_prompts()
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// List all resource templates.
    pub fn list_resource_templates(&self) -> Vec<Value> {
        get_all_resource_templates()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}
