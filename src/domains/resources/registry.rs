//! Resource Registry - resource templates advertised by the server.
//!
//! Resource templates use URI templates (RFC 6570) to describe the
//! parameterized resources a client can read.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use super::ResourceKind;

fn template(kind: ResourceKind, name: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: kind.uri_template(),
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Get all registered resource templates.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    ResourceKind::ALL
        .into_iter()
        .map(|kind| match kind {
            ResourceKind::Track => template(
                kind,
                "Audius Track",
                "Access track information from Audius",
            ),
            ResourceKind::User => template(
                kind,
                "Audius User",
                "Access user profile information from Audius",
            ),
            ResourceKind::Playlist => template(
                kind,
                "Audius Playlist",
                "Access playlist information from Audius",
            ),
            ResourceKind::Album => template(
                kind,
                "Audius Album",
                "Access album information from Audius",
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 4);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"audius://track/{id}"));
        assert!(uri_templates.contains(&"audius://user/{id}"));
        assert!(uri_templates.contains(&"audius://playlist/{id}"));
        assert!(uri_templates.contains(&"audius://album/{id}"));
    }

    #[test]
    fn test_templates_are_json() {
        for t in get_all_resource_templates() {
            assert_eq!(t.raw.mime_type.as_deref(), Some("application/json"));
        }
    }
}
