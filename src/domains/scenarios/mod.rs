//! Scenarios domain module.
//!
//! A scenario is a scripted exchange between an LLM and the Audius MCP
//! server: the requests the model should send, in order, the responses it
//! can expect, and the answer it should give the user. Scenarios are pure;
//! `runner.rs` prints them.
//!
//! ## Adding a New Scenario
//!
//! 1. Create a new file (e.g., `my_scenario.rs`) implementing `Scenario`
//! 2. Register it in `all_scenarios()`

mod artist_profile;
mod blockchain;
mod create_playlist;
pub mod fixtures;
mod resources;
mod runner;
mod search_tracks;
mod track_analytics;

use serde::Serialize;
use serde_json::Value;

use crate::core::{Error, McpClient, McpRequest, Result};

pub use artist_profile::ArtistProfileScenario;
pub use blockchain::BlockchainScenario;
pub use create_playlist::CreatePlaylistScenario;
pub use resources::ResourceScenario;
pub use runner::ScenarioRunner;
pub use search_tracks::SearchTracksScenario;
pub use track_analytics::TrackAnalyticsScenario;

/// Keyword selecting every registered scenario.
pub const ALL: &str = "all";

/// A scripted example.
pub trait Scenario: Send + Sync {
    /// Short name used to select the scenario, e.g. `search-tracks`.
    fn name(&self) -> &'static str;

    /// Heading printed above the scenario.
    fn title(&self) -> &'static str;

    /// Build the scenario's steps.
    fn build(&self, client: &McpClient) -> Result<Walkthrough>;
}

/// One printed (or silently built) item of a scenario.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A request the model sends. Unlabeled requests are built but only
    /// printed when every request is shown.
    Request {
        label: Option<String>,
        request: McpRequest,
    },

    /// A response the server would return.
    Response { label: Option<String>, body: Value },

    /// What the model tells the user afterwards.
    Answer { label: String, text: String },
}

/// Ordered steps of one scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Walkthrough {
    steps: Vec<Step>,
}

impl Walkthrough {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request printed under `label`.
    pub fn show(mut self, label: impl Into<String>, request: McpRequest) -> Self {
        self.steps.push(Step::Request {
            label: Some(label.into()),
            request,
        });
        self
    }

    /// Add a request that is built but not printed by default.
    pub fn silent(mut self, request: McpRequest) -> Self {
        self.steps.push(Step::Request {
            label: None,
            request,
        });
        self
    }

    /// Add an example response printed under `label`.
    pub fn response<T: Serialize>(mut self, label: impl Into<String>, body: &T) -> Result<Self> {
        self.steps.push(Step::Response {
            label: Some(label.into()),
            body: serde_json::to_value(body)?,
        });
        Ok(self)
    }

    /// Add an example response that is not printed by default.
    pub fn silent_response<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.steps.push(Step::Response {
            label: None,
            body: serde_json::to_value(body)?,
        });
        Ok(self)
    }

    /// Add the model's closing answer.
    pub fn answer(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.steps.push(Step::Answer {
            label: label.into(),
            text: text.into(),
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Every request, printed or not, in order.
    pub fn requests(&self) -> Vec<&McpRequest> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Request { request, .. } => Some(request),
                _ => None,
            })
            .collect()
    }
}

/// Every registered scenario, in run order.
pub fn all_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(SearchTracksScenario),
        Box::new(ArtistProfileScenario),
        Box::new(CreatePlaylistScenario),
        Box::new(ResourceScenario),
        Box::new(TrackAnalyticsScenario),
        Box::new(BlockchainScenario),
    ]
}

/// The scenarios run when none are named.
pub fn default_scenarios() -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(SearchTracksScenario),
        Box::new(ArtistProfileScenario),
        Box::new(CreatePlaylistScenario),
        Box::new(ResourceScenario),
    ]
}

/// Names of every registered scenario.
pub fn scenario_names() -> Vec<&'static str> {
    all_scenarios().iter().map(|s| s.name()).collect()
}

/// Resolve scenario names, keeping the order given.
///
/// No names selects the defaults; `all` selects everything.
pub fn select(names: &[String]) -> Result<Vec<Box<dyn Scenario>>> {
    if names.is_empty() {
        return Ok(default_scenarios());
    }
    if names.iter().any(|n| n == ALL) {
        return Ok(all_scenarios());
    }

    names
        .iter()
        .map(|name| {
            all_scenarios()
                .into_iter()
                .find(|s| s.name() == name)
                .ok_or_else(|| Error::unknown_scenario(name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    fn client() -> McpClient {
        McpClient::new(Config::default())
    }

    #[test]
    fn test_scenario_names_unique() {
        let names = scenario_names();
        assert_eq!(names.len(), 6);
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }

    #[test]
    fn test_select_defaults() {
        let selected = select(&[]).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["search-tracks", "artist-profile", "create-playlist", "resources"]
        );
    }

    #[test]
    fn test_select_keeps_given_order() {
        let selected = select(&["resources".to_string(), "blockchain".to_string()]).unwrap();
        let names: Vec<_> = selected.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["resources", "blockchain"]);
    }

    #[test]
    fn test_select_all_and_unknown() {
        assert_eq!(select(&[ALL.to_string()]).unwrap().len(), 6);
        assert!(matches!(
            select(&["karaoke".to_string()]),
            Err(Error::UnknownScenario(name)) if name == "karaoke"
        ));
    }

    #[test]
    fn test_every_scenario_builds() {
        let client = client();
        for scenario in all_scenarios() {
            let walkthrough = scenario.build(&client).unwrap();
            assert!(!walkthrough.requests().is_empty(), "{}", scenario.name());
            assert!(
                matches!(walkthrough.steps().last(), Some(Step::Answer { .. })),
                "{} should end with an answer",
                scenario.name()
            );
        }
    }
}
