//! Tool definitions module.
//!
//! Tools are grouped by area, one file per area:
//! - `search` - track search and filtered search
//! - `users` - profiles, tracks and followers
//! - `playlists` - playlist creation and editing
//! - `analytics` - listen counts and listener insights
//! - `blockchain` - wallets, balances and tips

pub mod analytics;
pub mod blockchain;
pub mod playlists;
pub mod search;
pub mod users;

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Serialize, de::DeserializeOwned};

use super::ToolError;
use crate::core::request::{self, McpRequest};

pub use analytics::{
    TrackListenCountsParams, TrackListenCountsTool, TrackListenerInsightsParams,
    TrackListenerInsightsTool, TrackTopListenersParams, TrackTopListenersTool,
};
pub use blockchain::{
    Blockchain, SendTipParams, SendTipTool, TokenBalanceParams, TokenBalanceTool, TokenType,
    UserWalletsParams, UserWalletsTool,
};
pub use playlists::{
    AddTracksToPlaylistParams, AddTracksToPlaylistTool, CreatePlaylistParams, CreatePlaylistTool,
};
pub use search::{AdvancedSearchParams, AdvancedSearchTool, SearchTracksParams, SearchTracksTool};
pub use users::{
    GetUserParams, GetUserTool, GetUserTracksParams, GetUserTracksTool, UserFollowersParams,
    UserFollowersTool,
};

/// Trait for tool definitions.
///
/// Each tool provides its wire name, a description and a typed parameter
/// struct. Parameters serialize to exactly the `arguments` object the server
/// expects.
pub trait ToolDefinition {
    /// Tool name as registered on the server.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments.
    type Params: Serialize + DeserializeOwned + JsonSchema + 'static;

    /// Check constraints the schema alone cannot express.
    fn validate(_params: &Self::Params) -> Result<(), ToolError> {
        Ok(())
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Build the `call_tool` request for `params`.
    fn request(params: &Self::Params) -> Result<McpRequest, ToolError> {
        Self::validate(params)?;
        let arguments = serde_json::to_value(params)
            .map_err(|e| ToolError::invalid_arguments(Self::NAME, e.to_string()))?;
        Ok(request::call_tool(Self::NAME, arguments))
    }

    /// Parse untyped arguments into this tool's params and validate them.
    fn parse(arguments: &serde_json::Value) -> Result<Self::Params, ToolError> {
        let params: Self::Params = serde_json::from_value(arguments.clone())
            .map_err(|e| ToolError::invalid_arguments(Self::NAME, e.to_string()))?;
        Self::validate(&params)?;
        Ok(params)
    }
}
