//! Search tools.
//!
//! `search-tracks` is a plain text search; `advanced-search` adds genre and
//! mood filters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolDefinition;

/// Parameters for `search-tracks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTracksParams {
    #[schemars(description = "Search query for finding tracks")]
    pub query: String,

    #[schemars(description = "Maximum number of results to return (default: 10)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchTracksParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Track search.
#[derive(Debug, Clone)]
pub struct SearchTracksTool;

impl ToolDefinition for SearchTracksTool {
    const NAME: &'static str = "search-tracks";
    const DESCRIPTION: &'static str = "Search for tracks by query";
    type Params = SearchTracksParams;
}

/// Parameters for `advanced-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchParams {
    #[schemars(description = "Search query")]
    pub query: String,

    #[schemars(description = "Genres to filter by (e.g. Ambient, Chillout)")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,

    #[schemars(description = "Moods to filter by (e.g. Relaxing)")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moods: Vec<String>,

    #[schemars(description = "Maximum number of results to return (default: 10)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl AdvancedSearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            genres: Vec::new(),
            moods: Vec::new(),
            limit: None,
        }
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn mood(mut self, mood: impl Into<String>) -> Self {
        self.moods.push(mood.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Search with genre and mood filters.
#[derive(Debug, Clone)]
pub struct AdvancedSearchTool;

impl ToolDefinition for AdvancedSearchTool {
    const NAME: &'static str = "advanced-search";
    const DESCRIPTION: &'static str = "Advanced search with filters";
    type Params = AdvancedSearchParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_tracks_request() {
        let params = SearchTracksParams::new("electronic dance music").with_limit(5);
        let request = SearchTracksTool::request(&params).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "method": "call_tool",
                "params": {
                    "name": "search-tracks",
                    "arguments": { "query": "electronic dance music", "limit": 5 }
                }
            })
        );
    }

    #[test]
    fn test_search_tracks_request_field_order() {
        let params = SearchTracksParams::new("electronic dance music").with_limit(5);
        let request = SearchTracksTool::request(&params).unwrap();
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"method":"call_tool","params":{"name":"search-tracks","arguments":{"query":"electronic dance music","limit":5}}}"#
        );
    }

    #[test]
    fn test_search_tracks_omits_missing_limit() {
        let value = serde_json::to_value(SearchTracksParams::new("lofi")).unwrap();
        assert_eq!(value, json!({ "query": "lofi" }));
    }

    #[test]
    fn test_advanced_search_arguments() {
        let params = AdvancedSearchParams::new("relaxing")
            .genre("Ambient")
            .genre("Chillout")
            .mood("Relaxing")
            .with_limit(10);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "query": "relaxing",
                "genres": ["Ambient", "Chillout"],
                "moods": ["Relaxing"],
                "limit": 10
            })
        );
    }

    #[test]
    fn test_advanced_search_parse_without_filters() {
        let params = AdvancedSearchTool::parse(&json!({ "query": "jazz" })).unwrap();
        assert!(params.genres.is_empty());
        assert!(params.moods.is_empty());
        assert_eq!(params.limit, None);
    }

    #[test]
    fn test_search_tool_metadata() {
        let tool = SearchTracksTool::to_tool();
        assert_eq!(tool.name, "search-tracks");
        assert!(tool.input_schema.contains_key("properties"));
    }
}
