//! Basic track search.

use super::fixtures::{TrackSearchResult, summer_vibes};
use super::{Scenario, Walkthrough};
use crate::core::response::ToolResponse;
use crate::core::{McpClient, Result};
use crate::domains::tools::definitions::{SearchTracksParams, SearchTracksTool};

const QUERY: &str = "electronic dance music";

pub struct SearchTracksScenario;

impl Scenario for SearchTracksScenario {
    fn name(&self) -> &'static str {
        "search-tracks"
    }

    fn title(&self) -> &'static str {
        "SEARCH TRACKS EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        let request = client.tool::<SearchTracksTool>(&SearchTracksParams::new(QUERY).with_limit(5))?;

        let response = ToolResponse::json(
            &TrackSearchResult {
                query: QUERY.to_string(),
                tracks: vec![summer_vibes()],
            },
            true,
        )?;

        Ok(Walkthrough::new()
            .show("Search Tracks Request", request)
            .response("Example Response", &response)?
            .answer(
                "Example LLM response",
                "I found some electronic dance tracks for you. 'Summer Vibes' by DJ Awesome is a popular one.",
            ))
    }
}
