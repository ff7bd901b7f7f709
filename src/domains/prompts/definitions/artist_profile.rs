//! Artist profile prompt definition.

use rmcp::model::PromptArgument;
use serde::{Deserialize, Serialize};

use super::PromptDefinition;
use crate::core::response::Role;
use crate::domains::prompts::templates::MessageTemplate;

const SYSTEM_TEMPLATE: &str = "\
To fulfill this request, use these tools to provide information about the artist:
- Use 'get-user' to get basic profile information about the artist
- Use 'get-user-tracks' to see tracks by the artist
- Use 'user-favorites' to see tracks the artist has favorited
- Use 'user-reposts' to see content the artist has reposted
{{#if includeConnections}}
For social connections:
- Use 'user-followers' to see the artist's followers
- Use 'user-following' to see who the artist follows
{{/if}}{{#if includePopularContent}}
For popular content:
- Get tracks by the artist and identify the most popular ones
- Get recent reposts to understand what content they're sharing
{{/if}}
Organize the information in a way that gives a comprehensive overview of the artist's profile, musical style, and social presence on Audius.";

const USER_TEMPLATE: &str = "\
I'd like to learn more about an artist on Audius with ID: {{userId}}. \
{{#if includeConnections}}Please include information about their social connections, like followers and who they follow. {{/if}}\
{{#if includePopularContent}}Please include their most popular tracks and recent reposts.{{/if}}";

/// Arguments for `artist-profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfileArgs {
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_connections: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_popular_content: Option<bool>,
}

impl ArtistProfileArgs {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            include_connections: None,
            include_popular_content: None,
        }
    }

    pub fn with_connections(mut self, include: bool) -> Self {
        self.include_connections = Some(include);
        self
    }

    pub fn with_popular_content(mut self, include: bool) -> Self {
        self.include_popular_content = Some(include);
        self
    }
}

/// Guided walkthrough for building an artist profile from several tools.
pub struct ArtistProfilePrompt;

impl PromptDefinition for ArtistProfilePrompt {
    const NAME: &'static str = "artist-profile";
    const DESCRIPTION: &'static str =
        "Get detailed information about an artist, their social connections, and popular content";

    type Args = ArtistProfileArgs;

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "userId".to_string(),
                title: None,
                description: Some("ID of the artist to explore".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "includeConnections".to_string(),
                title: None,
                description: Some(
                    "Include social connections (followers, following)".to_string(),
                ),
                required: Some(false),
            },
            PromptArgument {
                name: "includePopularContent".to_string(),
                title: None,
                description: Some("Include popular tracks and reposts".to_string()),
                required: Some(false),
            },
        ]
    }

    fn messages() -> Vec<MessageTemplate> {
        vec![
            MessageTemplate {
                role: Role::System,
                template: SYSTEM_TEMPLATE.to_string(),
            },
            MessageTemplate {
                role: Role::User,
                template: USER_TEMPLATE.to_string(),
            },
        ]
    }
}
