//! Tool Registry - central catalog of every tool the examples use.
//!
//! This module provides:
//! - The list of tool names and their metadata
//! - Checked dispatch: untyped arguments are parsed against the named
//!   tool's params before a `call_tool` request is built

use rmcp::model::Tool;
use serde_json::Value;
use tracing::{debug, warn};

use super::ToolError;
use super::definitions::{
    AddTracksToPlaylistTool, AdvancedSearchTool, CreatePlaylistTool, GetUserTool,
    GetUserTracksTool, SearchTracksTool, SendTipTool, TokenBalanceTool, ToolDefinition,
    TrackListenCountsTool, TrackListenerInsightsTool, TrackTopListenersTool, UserFollowersTool,
    UserWalletsTool,
};
use crate::core::request::{self, McpRequest};

/// Tool registry - the catalog of known tools.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            SearchTracksTool::NAME,
            AdvancedSearchTool::NAME,
            GetUserTool::NAME,
            GetUserTracksTool::NAME,
            UserFollowersTool::NAME,
            CreatePlaylistTool::NAME,
            AddTracksToPlaylistTool::NAME,
            TrackListenCountsTool::NAME,
            TrackTopListenersTool::NAME,
            TrackListenerInsightsTool::NAME,
            UserWalletsTool::NAME,
            TokenBalanceTool::NAME,
            SendTipTool::NAME,
        ]
    }

    /// Whether `name` is a known tool.
    pub fn contains(&self, name: &str) -> bool {
        self.tool_names().contains(&name)
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SearchTracksTool::to_tool(),
            AdvancedSearchTool::to_tool(),
            GetUserTool::to_tool(),
            GetUserTracksTool::to_tool(),
            UserFollowersTool::to_tool(),
            CreatePlaylistTool::to_tool(),
            AddTracksToPlaylistTool::to_tool(),
            TrackListenCountsTool::to_tool(),
            TrackTopListenersTool::to_tool(),
            TrackListenerInsightsTool::to_tool(),
            UserWalletsTool::to_tool(),
            TokenBalanceTool::to_tool(),
            SendTipTool::to_tool(),
        ]
    }

    /// Build a `call_tool` request after checking `arguments` against the
    /// named tool's params.
    ///
    /// The request carries `arguments` exactly as given.
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<McpRequest, ToolError> {
        if !arguments.is_object() {
            return Err(ToolError::invalid_arguments(name, "arguments must be a JSON object"));
        }

        match name {
            SearchTracksTool::NAME => check::<SearchTracksTool>(&arguments)?,
            AdvancedSearchTool::NAME => check::<AdvancedSearchTool>(&arguments)?,
            GetUserTool::NAME => check::<GetUserTool>(&arguments)?,
            GetUserTracksTool::NAME => check::<GetUserTracksTool>(&arguments)?,
            UserFollowersTool::NAME => check::<UserFollowersTool>(&arguments)?,
            CreatePlaylistTool::NAME => check::<CreatePlaylistTool>(&arguments)?,
            AddTracksToPlaylistTool::NAME => check::<AddTracksToPlaylistTool>(&arguments)?,
            TrackListenCountsTool::NAME => check::<TrackListenCountsTool>(&arguments)?,
            TrackTopListenersTool::NAME => check::<TrackTopListenersTool>(&arguments)?,
            TrackListenerInsightsTool::NAME => check::<TrackListenerInsightsTool>(&arguments)?,
            UserWalletsTool::NAME => check::<UserWalletsTool>(&arguments)?,
            TokenBalanceTool::NAME => check::<TokenBalanceTool>(&arguments)?,
            SendTipTool::NAME => check::<SendTipTool>(&arguments)?,
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        }

        debug!("Arguments for {} accepted", name);
        Ok(request::call_tool(name, arguments))
    }
}

fn check<T: ToolDefinition>(arguments: &Value) -> Result<(), ToolError> {
    T::parse(arguments).map(|_| ())
}
