//! User profile tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ToolDefinition;

/// Parameters for `get-user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserParams {
    #[schemars(description = "The ID of the user to retrieve")]
    pub user_id: String,
}

impl GetUserParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Fetch a user profile.
#[derive(Debug, Clone)]
pub struct GetUserTool;

impl ToolDefinition for GetUserTool {
    const NAME: &'static str = "get-user";
    const DESCRIPTION: &'static str = "Get user details by ID";
    type Params = GetUserParams;
}

/// Parameters for `get-user-tracks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserTracksParams {
    #[schemars(description = "The ID of the user to get tracks for")]
    pub user_id: String,

    #[schemars(description = "Maximum number of tracks to return (default: 10)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl GetUserTracksParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// List tracks uploaded by a user.
#[derive(Debug, Clone)]
pub struct GetUserTracksTool;

impl ToolDefinition for GetUserTracksTool {
    const NAME: &'static str = "get-user-tracks";
    const DESCRIPTION: &'static str = "Get tracks for a user";
    type Params = GetUserTracksParams;
}

/// Parameters for `user-followers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserFollowersParams {
    #[schemars(description = "ID of the user whose followers to retrieve")]
    pub user_id: String,

    #[schemars(description = "Maximum number of followers to return (default: 10)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl UserFollowersParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// List a user's followers.
#[derive(Debug, Clone)]
pub struct UserFollowersTool;

impl ToolDefinition for UserFollowersTool {
    const NAME: &'static str = "user-followers";
    const DESCRIPTION: &'static str = "Get user followers";
    type Params = UserFollowersParams;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_is_camel_case() {
        let value = serde_json::to_value(GetUserParams::new("789")).unwrap();
        assert_eq!(value, json!({ "userId": "789" }));
    }

    #[test]
    fn test_user_tracks_request() {
        let request = GetUserTracksTool::request(&GetUserTracksParams::new("789").with_limit(10))
            .unwrap();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["params"]["name"], "get-user-tracks");
        assert_eq!(value["params"]["arguments"], json!({ "userId": "789", "limit": 10 }));
    }

    #[test]
    fn test_followers_parse_requires_user_id() {
        let err = UserFollowersTool::parse(&json!({ "limit": 5 })).unwrap_err();
        assert!(err.to_string().contains("user-followers"));
        assert!(err.to_string().contains("userId"));
    }
}
