//! Artist profile built from a guided prompt and several tools.

use super::fixtures::dj_awesome_profile;
use super::{Scenario, Walkthrough};
use crate::core::response::ToolResponse;
use crate::core::{McpClient, Result};
use crate::domains::prompts::PromptDefinition;
use crate::domains::prompts::definitions::{ArtistProfileArgs, ArtistProfilePrompt};
use crate::domains::tools::definitions::{
    GetUserParams, GetUserTool, GetUserTracksParams, GetUserTracksTool, UserFollowersParams,
    UserFollowersTool,
};

const ARTIST_ID: &str = "789";

pub struct ArtistProfileScenario;

impl Scenario for ArtistProfileScenario {
    fn name(&self) -> &'static str {
        "artist-profile"
    }

    fn title(&self) -> &'static str {
        "ARTIST PROFILE EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        let args = ArtistProfileArgs::new(ARTIST_ID)
            .with_connections(true)
            .with_popular_content(true);
        let prompt_request = client.prompt::<ArtistProfilePrompt>(&args)?;
        let prompt_response =
            client.preview_prompt(ArtistProfilePrompt::NAME, &serde_json::to_value(&args)?)?;

        let profile = ToolResponse::json(&dj_awesome_profile(), true)?;

        Ok(Walkthrough::new()
            .show("Artist Profile Prompt Request", prompt_request)
            .response("Example Prompt Response", &prompt_response)?
            .silent(client.tool::<GetUserTool>(&GetUserParams::new(ARTIST_ID))?)
            .silent_response(&profile)?
            .silent(client.tool::<GetUserTracksTool>(
                &GetUserTracksParams::new(ARTIST_ID).with_limit(10),
            )?)
            .silent(client.tool::<UserFollowersTool>(
                &UserFollowersParams::new(ARTIST_ID).with_limit(5),
            )?)
            .answer(
                "Example LLM comprehensive response",
                "DJ Awesome is an electronic music producer with 10,000 followers. Their most popular track is 'Summer Vibes'...",
            ))
    }
}
