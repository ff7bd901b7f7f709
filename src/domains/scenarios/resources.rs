//! Reading track, user and playlist resources.

use super::fixtures::summer_vibes;
use super::{Scenario, Walkthrough};
use crate::core::{McpClient, Result};
use crate::domains::resources::ResourceUri;

pub struct ResourceScenario;

impl Scenario for ResourceScenario {
    fn name(&self) -> &'static str {
        "resources"
    }

    fn title(&self) -> &'static str {
        "RESOURCE EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        let track = ResourceUri::track("12345");
        let user = ResourceUri::user("789");
        let playlist = ResourceUri::playlist("456");

        // Resource reads return `contents`, not `content`.
        let contents = serde_json::json!({
            "contents": [{
                "uri": track.to_string(),
                "mimeType": "application/json",
                "text": serde_json::to_string_pretty(&summer_vibes())?
            }]
        });

        Ok(Walkthrough::new()
            .show("Track Resource Request", client.read_resource(&track.to_string()))
            .silent_response(&contents)?
            .silent(client.read_resource(&user.to_string()))
            .silent(client.read_resource(&playlist.to_string()))
            .answer(
                "Example LLM response using resources",
                "I've found the track 'Summer Vibes' by DJ Awesome. It's a 3-minute electronic track with a tempo of 128 BPM.",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::request::read_resource;

    #[test]
    fn test_resource_requests() {
        let walkthrough = ResourceScenario
            .build(&McpClient::new(Config::default()))
            .unwrap();

        assert_eq!(
            walkthrough.requests(),
            vec![
                &read_resource("audius://track/12345"),
                &read_resource("audius://user/789"),
                &read_resource("audius://playlist/456"),
            ]
        );
    }
}
