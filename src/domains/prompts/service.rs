//! Prompt service implementation.
//!
//! The PromptService holds the prompt catalog. It checks `get_prompt`
//! arguments against each prompt's declared arguments and renders previews
//! of the messages the server would return.

use rmcp::model::Prompt;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::{PromptTemplate, template_arguments};
use crate::core::request::{self, McpRequest};
use crate::core::response::PromptResponse;

/// Service for listing prompts and preparing prompt requests.
pub struct PromptService {
    /// Key: prompt name, Value: prompt template
    prompts: BTreeMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with every registered prompt.
    pub fn new() -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            prompts: BTreeMap::new(),
        };
        for template in get_all_prompts() {
            service.register_prompt(template);
        }
        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts, sorted by name.
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Build a `get_prompt` request after checking required arguments.
    ///
    /// The request carries `arguments` exactly as given.
    pub fn get_prompt(&self, name: &str, arguments: Value) -> Result<McpRequest, PromptError> {
        let template = self.lookup(name)?;
        let vars = template_arguments(&arguments)?;

        for arg in &template.arguments {
            if arg.required.unwrap_or(false) && !vars.contains_key(&arg.name) {
                return Err(PromptError::missing_argument(name, &arg.name));
            }
        }

        Ok(request::get_prompt(name, arguments))
    }

    /// Render the messages the server would return for this prompt.
    pub fn preview(&self, name: &str, arguments: &Value) -> Result<PromptResponse, PromptError> {
        let template = self.lookup(name)?;
        let vars = template_arguments(arguments)?;
        template.render(&vars)
    }

    fn lookup(&self, name: &str) -> Result<&PromptTemplate, PromptError> {
        self.prompts.get(name).ok_or_else(|| {
            warn!("Unknown prompt requested: {}", name);
            PromptError::not_found(name)
        })
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::response::Role;
    use serde_json::json;

    #[test]
    fn test_prompt_service_creation() {
        let service = PromptService::new();
        let prompts = service.list_prompts();
        assert!(!prompts.is_empty());
        assert_eq!(prompts[0].name, "artist-profile");
    }

    #[test]
    fn test_get_prompt_with_arguments() {
        let service = PromptService::new();
        let arguments = json!({ "userId": "789", "includeConnections": true });
        let request = service.get_prompt("artist-profile", arguments.clone()).unwrap();
        assert_eq!(request, request::get_prompt("artist-profile", arguments));
    }

    #[test]
    fn test_get_prompt_missing_required_argument() {
        let service = PromptService::new();
        let result = service.get_prompt("artist-profile", json!({ "includeConnections": true }));
        assert!(matches!(
            result,
            Err(PromptError::MissingArgument { prompt, argument })
                if prompt == "artist-profile" && argument == "userId"
        ));
    }

    #[test]
    fn test_get_nonexistent_prompt() {
        let service = PromptService::new();
        let result = service.get_prompt("nonexistent", json!({}));
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }

    #[test]
    fn test_preview_with_all_sections() {
        let service = PromptService::new();
        let response = service
            .preview(
                "artist-profile",
                &json!({
                    "userId": "789",
                    "includeConnections": true,
                    "includePopularContent": true
                }),
            )
            .unwrap();

        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[0].role, Role::System);
        let system = response.messages[0].content.as_text();
        assert!(system.starts_with("To fulfill this request"));
        assert!(system.contains("For social connections:"));
        assert!(system.contains("For popular content:"));

        let user = response.messages[1].content.as_text();
        assert!(user.contains("ID: 789."));
        assert!(user.contains("followers and who they follow"));
        assert!(user.ends_with("recent reposts."));
    }

    #[test]
    fn test_preview_without_optional_sections() {
        let service = PromptService::new();
        let response = service
            .preview(
                "artist-profile",
                &json!({ "userId": "789", "includeConnections": false }),
            )
            .unwrap();

        let system = response.messages[0].content.as_text();
        assert!(!system.contains("For social connections:"));
        assert!(!system.contains("For popular content:"));
        assert!(system.ends_with("social presence on Audius."));
        assert_eq!(
            response.messages[1].content.as_text(),
            "I'd like to learn more about an artist on Audius with ID: 789."
        );
    }
}
