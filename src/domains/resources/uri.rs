//! Typed resource URIs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ResourceError;
use crate::core::request::{self, McpRequest};

/// URI scheme used by every resource on the server.
pub const SCHEME: &str = "audius";

/// The kinds of resource the server serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Track,
    User,
    Playlist,
    Album,
}

impl ResourceKind {
    /// Every kind, in catalog order.
    pub const ALL: [ResourceKind; 4] = [Self::Track, Self::User, Self::Playlist, Self::Album];

    /// Path segment used in URIs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::User => "user",
            Self::Playlist => "playlist",
            Self::Album => "album",
        }
    }

    /// URI template, e.g. `audius://track/{id}`.
    pub fn uri_template(self) -> String {
        format!("{}://{}/{{id}}", SCHEME, self.as_str())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ResourceError::unknown_kind(s))
    }
}

/// A parsed `audius://<kind>/<id>` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceUri {
    kind: ResourceKind,
    id: String,
}

impl ResourceUri {
    pub fn new(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn track(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::Track, id)
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::User, id)
    }

    pub fn playlist(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::Playlist, id)
    }

    pub fn album(id: impl Into<String>) -> Self {
        Self::new(ResourceKind::Album, id)
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Build the `read_resource` request for this URI.
    pub fn read_request(&self) -> McpRequest {
        request::read_resource(self.to_string())
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", SCHEME, self.kind, self.id)
    }
}

impl FromStr for ResourceUri {
    type Err = ResourceError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = uri
            .split_once("://")
            .ok_or_else(|| ResourceError::invalid_uri(uri))?;

        if scheme != SCHEME {
            return Err(ResourceError::unsupported_scheme(scheme, uri));
        }

        let (kind, id) = rest
            .split_once('/')
            .ok_or_else(|| ResourceError::invalid_uri(uri))?;

        if id.trim().is_empty() {
            return Err(ResourceError::invalid_uri(uri));
        }

        Ok(Self::new(kind.parse()?, id))
    }
}

impl Serialize for ResourceUri {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceUri {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_track_uri() {
        let uri: ResourceUri = "audius://track/12345".parse().unwrap();
        assert_eq!(uri.kind(), ResourceKind::Track);
        assert_eq!(uri.id(), "12345");
        assert_eq!(uri.to_string(), "audius://track/12345");
    }

    #[test]
    fn test_read_request() {
        let request = ResourceUri::track("12345").read_request();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "method": "read_resource", "params": { "uri": "audius://track/12345" } })
        );
    }

    #[test]
    fn test_id_may_contain_slashes() {
        let uri: ResourceUri = "audius://playlist/456/extra".parse().unwrap();
        assert_eq!(uri.id(), "456/extra");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "track/12345".parse::<ResourceUri>(),
            Err(ResourceError::InvalidUri(_))
        ));
        assert!(matches!(
            "spotify://track/1".parse::<ResourceUri>(),
            Err(ResourceError::UnsupportedScheme { scheme, .. }) if scheme == "spotify"
        ));
        assert!(matches!(
            "audius://genre/house".parse::<ResourceUri>(),
            Err(ResourceError::UnknownKind(kind)) if kind == "genre"
        ));
        assert!(matches!(
            "audius://user/".parse::<ResourceUri>(),
            Err(ResourceError::InvalidUri(_))
        ));
        assert!("audius://user".parse::<ResourceUri>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let uri = ResourceUri::user("789");
        assert_eq!(serde_json::to_value(&uri).unwrap(), json!("audius://user/789"));

        let parsed: ResourceUri = serde_json::from_value(json!("audius://album/42")).unwrap();
        assert_eq!(parsed, ResourceUri::album("42"));
        assert!(serde_json::from_value::<ResourceUri>(json!("nope")).is_err());
    }

    #[test]
    fn test_uri_templates() {
        assert_eq!(ResourceKind::Track.uri_template(), "audius://track/{id}");
        assert_eq!(ResourceKind::Album.uri_template(), "audius://album/{id}");
    }
}
