//! Example domain objects embedded in example responses.

use serde::{Deserialize, Serialize};

/// Artist reference embedded in a track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub url: String,
}

/// Track as returned by search tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: String,
    pub title: String,
    pub user: UserRef,
    /// Seconds.
    pub duration: u32,
    pub artwork: Artwork,
}

/// Payload of a `search-tracks` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSearchResult {
    pub query: String,
    pub tracks: Vec<TrackSummary>,
}

/// Payload of a `get-user` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub handle: String,
    pub follower_count: u64,
    pub followee_count: u64,
    pub track_count: u64,
}

/// Payload of a `create-playlist` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistCreated {
    pub playlist_id: String,
    pub message: String,
}

pub fn dj_awesome() -> UserRef {
    UserRef {
        id: "789".to_string(),
        name: "DJ Awesome".to_string(),
    }
}

pub fn dj_awesome_profile() -> UserProfile {
    UserProfile {
        id: "789".to_string(),
        name: "DJ Awesome".to_string(),
        handle: "djawesome".to_string(),
        follower_count: 10_000,
        followee_count: 250,
        track_count: 42,
    }
}

pub fn summer_vibes() -> TrackSummary {
    TrackSummary {
        id: "12345".to_string(),
        title: "Summer Vibes".to_string(),
        user: dj_awesome(),
        duration: 180,
        artwork: Artwork {
            url: "https://example.com/artwork.jpg".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_track_shape() {
        assert_eq!(
            serde_json::to_value(summer_vibes()).unwrap(),
            json!({
                "id": "12345",
                "title": "Summer Vibes",
                "user": { "id": "789", "name": "DJ Awesome" },
                "duration": 180,
                "artwork": { "url": "https://example.com/artwork.jpg" }
            })
        );
    }

    #[test]
    fn test_profile_uses_camel_case() {
        let value = serde_json::to_value(dj_awesome_profile()).unwrap();
        assert_eq!(value["followerCount"], 10_000);
    }
}
