//! Playlist management tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolDefinition;
use crate::domains::tools::ToolError;

/// Parameters for `create-playlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistParams {
    #[schemars(description = "ID of the user creating the playlist")]
    pub user_id: String,

    #[schemars(description = "Name of the playlist")]
    pub playlist_name: String,

    #[schemars(description = "Description of the playlist")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[schemars(description = "Whether the playlist is private")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[schemars(description = "Whether this is an album")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_album: Option<bool>,

    #[schemars(description = "URL to the artwork image")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
}

impl CreatePlaylistParams {
    pub fn new(user_id: impl Into<String>, playlist_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            playlist_name: playlist_name.into(),
            description: None,
            is_private: None,
            is_album: None,
            artwork_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }
}

/// Create a playlist owned by a user.
#[derive(Debug, Clone)]
pub struct CreatePlaylistTool;

impl ToolDefinition for CreatePlaylistTool {
    const NAME: &'static str = "create-playlist";
    const DESCRIPTION: &'static str = "Create a new playlist";
    type Params = CreatePlaylistParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        if params.playlist_name.trim().is_empty() {
            return Err(ToolError::invalid_arguments(
                Self::NAME,
                "playlistName must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parameters for `add-tracks-to-playlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTracksToPlaylistParams {
    #[schemars(description = "ID of the user adding tracks")]
    pub user_id: String,

    #[schemars(description = "ID of the playlist to add tracks to")]
    pub playlist_id: String,

    #[schemars(description = "IDs of tracks to add to the playlist")]
    pub track_ids: Vec<String>,
}

impl AddTracksToPlaylistParams {
    pub fn new<I, S>(user_id: impl Into<String>, playlist_id: impl Into<String>, track_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            playlist_id: playlist_id.into(),
            track_ids: track_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Append tracks to an existing playlist.
#[derive(Debug, Clone)]
pub struct AddTracksToPlaylistTool;

impl ToolDefinition for AddTracksToPlaylistTool {
    const NAME: &'static str = "add-tracks-to-playlist";
    const DESCRIPTION: &'static str = "Add tracks to a playlist";
    type Params = AddTracksToPlaylistParams;

    fn validate(params: &Self::Params) -> Result<(), ToolError> {
        if params.track_ids.is_empty() {
            return Err(ToolError::invalid_arguments(
                Self::NAME,
                "trackIds must contain at least one track",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_playlist_keeps_explicit_false() {
        let params = CreatePlaylistParams::new("123", "Evening Relaxation")
            .with_description("Calm ambient tracks for relaxing in the evening")
            .private(false);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "userId": "123",
                "playlistName": "Evening Relaxation",
                "description": "Calm ambient tracks for relaxing in the evening",
                "isPrivate": false
            })
        );
    }

    #[test]
    fn test_create_playlist_rejects_blank_name() {
        let result = CreatePlaylistTool::request(&CreatePlaylistParams::new("123", "  "));
        assert!(matches!(result, Err(ToolError::InvalidArguments { .. })));
    }

    #[test]
    fn test_add_tracks_request() {
        let params = AddTracksToPlaylistParams::new("123", "456", ["789", "101112", "131415"]);
        let request = AddTracksToPlaylistTool::request(&params).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap()["params"]["arguments"],
            json!({
                "userId": "123",
                "playlistId": "456",
                "trackIds": ["789", "101112", "131415"]
            })
        );
    }

    #[test]
    fn test_add_tracks_rejects_empty_list() {
        let params = AddTracksToPlaylistParams::new("123", "456", Vec::<String>::new());
        assert!(AddTracksToPlaylistTool::request(&params).is_err());
    }
}
