//! Listen counts and listener insights for one track.

use super::{Scenario, Walkthrough};
use crate::core::{McpClient, Result};
use crate::domains::tools::definitions::{
    TrackListenCountsParams, TrackListenCountsTool, TrackListenerInsightsParams,
    TrackListenerInsightsTool, TrackTopListenersParams, TrackTopListenersTool,
};

const TRACK_ID: &str = "12345";

pub struct TrackAnalyticsScenario;

impl Scenario for TrackAnalyticsScenario {
    fn name(&self) -> &'static str {
        "track-analytics"
    }

    fn title(&self) -> &'static str {
        "TRACK ANALYTICS EXAMPLE"
    }

    fn build(&self, client: &McpClient) -> Result<Walkthrough> {
        Ok(Walkthrough::new()
            .show(
                "Listen Counts Request",
                client.tool::<TrackListenCountsTool>(&TrackListenCountsParams::new(TRACK_ID))?,
            )
            .silent(client.tool::<TrackTopListenersTool>(
                &TrackTopListenersParams::new(TRACK_ID).with_limit(5),
            )?)
            .silent(client.tool::<TrackListenerInsightsTool>(
                &TrackListenerInsightsParams::new(TRACK_ID),
            )?)
            .answer(
                "Example LLM response",
                "Your track has 10,000 plays with most listeners coming from the US and Germany. It's most popular among 18-24 year olds.",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;

    #[test]
    fn test_every_request_targets_the_track() {
        let walkthrough = TrackAnalyticsScenario
            .build(&McpClient::new(Config::default()))
            .unwrap();
        let requests = walkthrough.requests();
        assert_eq!(requests.len(), 3);

        for request in requests {
            let value = serde_json::to_value(request).unwrap();
            assert_eq!(value["params"]["arguments"]["trackId"], TRACK_ID);
        }
    }
}
