//! Themed playlist: search, create, then fill.

use super::fixtures::PlaylistCreated;
use super::{Scenario, Walkthrough};
use crate::core::response::ToolResponse;
use crate::core::{McpClient, Result};
use crate::domains::tools::definitions::{
    AddTracksToPlaylistParams, AddTracksToPlaylistTool, AdvancedSearchParams, AdvancedSearchTool,
    CreatePlaylistParams, CreatePlaylistTool,
};

const USER_ID: &str = "123";
const PLAYLIST_ID: &str = "456";

pub struct CreatePlaylistScenario;

impl Scenario for CreatePlaylistScenario {
    fn name(&self) -> &'static str {
        "create-playlist"
    }

    fn title(&self) -> &'static str {
        "CREATE PLAYLIST EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        let search = client.tool::<AdvancedSearchTool>(
            &AdvancedSearchParams::new("relaxing")
                .genre("Ambient")
                .genre("Chillout")
                .mood("Relaxing")
                .with_limit(10),
        )?;

        let create = client.tool::<CreatePlaylistTool>(
            &CreatePlaylistParams::new(USER_ID, "Evening Relaxation")
                .with_description("Calm ambient tracks for relaxing in the evening")
                .private(false),
        )?;

        // The id handed back here feeds the add-tracks call below.
        let created = ToolResponse::json(
            &PlaylistCreated {
                playlist_id: PLAYLIST_ID.to_string(),
                message: "Playlist created successfully".to_string(),
            },
            false,
        )?;

        let add_tracks = client.tool::<AddTracksToPlaylistTool>(&AddTracksToPlaylistParams::new(
            USER_ID,
            PLAYLIST_ID,
            ["789", "101112", "131415"],
        ))?;

        Ok(Walkthrough::new()
            .show("Advanced Search Request", search)
            .silent(create)
            .silent_response(&created)?
            .silent(add_tracks)
            .answer(
                "Example LLM response",
                "I've created a new playlist called 'Evening Relaxation' with 3 ambient tracks that are perfect for unwinding.",
            ))
    }
}
