//! Track analytics tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolDefinition;

/// Parameters for `track-listen-counts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackListenCountsParams {
    #[schemars(description = "ID of the track to get listen counts for")]
    pub track_id: String,
}

impl TrackListenCountsParams {
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackListenCountsTool;

impl ToolDefinition for TrackListenCountsTool {
    const NAME: &'static str = "track-listen-counts";
    const DESCRIPTION: &'static str = "Get listen counts for a track";
    type Params = TrackListenCountsParams;
}

/// Parameters for `track-top-listeners`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackTopListenersParams {
    #[schemars(description = "ID of the track to get top listeners for")]
    pub track_id: String,

    #[schemars(description = "Maximum number of top listeners to return (default: 10)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TrackTopListenersParams {
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone)]
pub struct TrackTopListenersTool;

impl ToolDefinition for TrackTopListenersTool {
    const NAME: &'static str = "track-top-listeners";
    const DESCRIPTION: &'static str = "Get top listeners for a track";
    type Params = TrackTopListenersParams;
}

/// Parameters for `track-listener-insights`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackListenerInsightsParams {
    #[schemars(description = "ID of the track to get listener insights for")]
    pub track_id: String,
}

impl TrackListenerInsightsParams {
    pub fn new(track_id: impl Into<String>) -> Self {
        Self {
            track_id: track_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackListenerInsightsTool;

impl ToolDefinition for TrackListenerInsightsTool {
    const NAME: &'static str = "track-listener-insights";
    const DESCRIPTION: &'static str = "Get listener insights for a track";
    type Params = TrackListenerInsightsParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_listeners_arguments() {
        let value = serde_json::to_value(TrackTopListenersParams::new("12345").with_limit(5)).unwrap();
        assert_eq!(value, json!({ "trackId": "12345", "limit": 5 }));
    }

    #[test]
    fn test_listen_counts_request_name() {
        let request = TrackListenCountsTool::request(&TrackListenCountsParams::new("12345")).unwrap();
        assert_eq!(request.summary(), "call_tool track-listen-counts");
    }
}
