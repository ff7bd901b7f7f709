//! Scenario runner - builds scenarios and prints them.

use tokio::io::AsyncWrite;
use tracing::{debug, info};

use super::{Scenario, Step, Walkthrough};
use crate::core::{ExampleWriter, McpClient, Result};

/// Runs scenarios in order against one client and prints them.
pub struct ScenarioRunner {
    client: McpClient,
    show_all_requests: bool,
}

impl ScenarioRunner {
    /// Create a runner; visibility of silent steps follows the client's
    /// output config.
    pub fn new(client: McpClient) -> Self {
        let show_all_requests = client.config().output.show_all_requests;
        Self {
            client,
            show_all_requests,
        }
    }

    /// Print silent requests and responses too.
    pub fn show_all_requests(mut self, show: bool) -> Self {
        self.show_all_requests = show;
        self
    }

    /// Build and print each scenario in order.
    pub async fn run<W>(
        &self,
        scenarios: &[Box<dyn Scenario>],
        writer: &mut ExampleWriter<W>,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        info!(
            "Running {} scenario(s) against {}",
            scenarios.len(),
            self.client.server_url()
        );

        for (index, scenario) in scenarios.iter().enumerate() {
            info!("Running scenario: {}", scenario.name());
            let walkthrough = scenario.build(&self.client)?;

            if index > 0 {
                writer.blank().await?;
            }
            writer.heading(scenario.title()).await?;
            self.render(&walkthrough, writer).await?;
        }

        writer.flush().await?;
        Ok(())
    }

    /// Print the tool, prompt and resource-template catalogs.
    pub async fn catalog<W>(&self, writer: &mut ExampleWriter<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        writer.heading("CATALOG").await?;
        writer
            .line(&format!(
                "Server: {} ({})",
                self.client.server_name(),
                self.client.server_url()
            ))
            .await?;
        writer.blank().await?;
        writer
            .labeled_json("Available tools", &self.client.list_tools())
            .await?;
        writer.blank().await?;
        writer
            .labeled_json("Available prompts", &self.client.list_prompts())
            .await?;
        writer.blank().await?;
        writer
            .labeled_json("Resource templates", &self.client.list_resource_templates())
            .await?;
        writer.flush().await?;
        Ok(())
    }

    async fn render<W>(&self, walkthrough: &Walkthrough, writer: &mut ExampleWriter<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut first = true;

        for step in walkthrough.steps() {
            match step {
                Step::Request { label, request } => {
                    let label = match (label, self.show_all_requests) {
                        (Some(label), _) => label.clone(),
                        (None, true) => format!("Request ({})", request.summary()),
                        (None, false) => {
                            debug!("Built {}", request.summary());
                            continue;
                        }
                    };
                    separate(writer, &mut first).await?;
                    writer.labeled_json(&label, request).await?;
                }
                Step::Response { label, body } => {
                    let label = match (label, self.show_all_requests) {
                        (Some(label), _) => label.clone(),
                        (None, true) => "Example Response".to_string(),
                        (None, false) => continue,
                    };
                    separate(writer, &mut first).await?;
                    writer.labeled_json(&label, body).await?;
                }
                Step::Answer { label, text } => {
                    separate(writer, &mut first).await?;
                    writer.line(&format!("{}:", label)).await?;
                    writer.line(text).await?;
                }
            }
        }

        Ok(())
    }
}

/// Blank line between printed items of one scenario.
async fn separate<W>(writer: &mut ExampleWriter<W>, first: &mut bool) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    if !*first {
        writer.blank().await?;
    }
    *first = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Config, OutputFormat};
    use crate::domains::scenarios::{
        ArtistProfileScenario, ResourceScenario, SearchTracksScenario, default_scenarios,
    };

    fn runner() -> ScenarioRunner {
        ScenarioRunner::new(McpClient::new(Config::default()))
    }

    async fn run(runner: &ScenarioRunner, scenarios: Vec<Box<dyn Scenario>>, format: OutputFormat) -> String {
        let mut writer = ExampleWriter::new(Vec::new(), format);
        runner.run(&scenarios, &mut writer).await.unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn test_resource_scenario_output() {
        let output = run(&runner(), vec![Box::new(ResourceScenario)], OutputFormat::Compact).await;

        assert_eq!(
            output,
            "\n=== RESOURCE EXAMPLE ===\n\
             Track Resource Request:\n\
             {\"method\":\"read_resource\",\"params\":{\"uri\":\"audius://track/12345\"}}\n\
             \n\
             Example LLM response using resources:\n\
             I've found the track 'Summer Vibes' by DJ Awesome. It's a 3-minute electronic track with a tempo of 128 BPM.\n"
        );
    }

    #[tokio::test]
    async fn test_compact_search_output_keeps_key_order() {
        let output = run(&runner(), vec![Box::new(SearchTracksScenario)], OutputFormat::Compact).await;

        assert!(output.contains(
            "Search Tracks Request:\n\
             {\"method\":\"call_tool\",\"params\":{\"name\":\"search-tracks\",\"arguments\":{\"query\":\"electronic dance music\",\"limit\":5}}}\n"
        ));
        assert!(output.contains("Example Response:\n{\"content\":[{\"type\":\"text\",\"text\":"));
    }

    #[tokio::test]
    async fn test_silent_requests_hidden_by_default() {
        let output = run(&runner(), vec![Box::new(ArtistProfileScenario)], OutputFormat::Compact).await;
        assert!(output.contains("Artist Profile Prompt Request:"));
        assert!(output.contains("\"name\":\"artist-profile\""));
        assert!(!output.contains("\"name\":\"get-user\""));
    }

    #[tokio::test]
    async fn test_show_all_requests() {
        let runner = runner().show_all_requests(true);
        let output = run(&runner, vec![Box::new(ArtistProfileScenario)], OutputFormat::Compact).await;
        assert!(output.contains("Request (call_tool get-user):"));
        assert!(output.contains("Request (call_tool user-followers):"));
        assert!(output.contains("followerCount"));
    }

    #[tokio::test]
    async fn test_default_run_headings_in_order() {
        let output = run(&runner(), default_scenarios(), OutputFormat::Pretty).await;

        let headings: Vec<_> = output
            .lines()
            .filter(|line| line.starts_with("=== "))
            .collect();
        assert_eq!(
            headings,
            vec![
                "=== SEARCH TRACKS EXAMPLE ===",
                "=== ARTIST PROFILE EXAMPLE ===",
                "=== CREATE PLAYLIST EXAMPLE ===",
                "=== RESOURCE EXAMPLE ===",
            ]
        );
    }

    #[tokio::test]
    async fn test_pretty_search_output() {
        let output = run(&runner(), vec![Box::new(SearchTracksScenario)], OutputFormat::Pretty).await;
        assert!(output.contains("Search Tracks Request:\n{\n  \"method\": \"call_tool\""));
        assert!(output.contains("\nExample Response:\n"));
        assert!(output.ends_with("'Summer Vibes' by DJ Awesome is a popular one.\n"));
    }

    #[tokio::test]
    async fn test_catalog_output() {
        let runner = runner();
        let mut writer = ExampleWriter::new(Vec::new(), OutputFormat::Compact);
        runner.catalog(&mut writer).await.unwrap();
        let output = String::from_utf8(writer.into_inner()).unwrap();

        assert!(output.starts_with("\n=== CATALOG ===\nServer: audius-mcp (http://localhost:3000)\n"));
        assert!(output.contains("Available tools:"));
        assert!(output.contains("\"name\":\"send-tip\""));
        assert!(output.contains("\"uriTemplate\":\"audius://album/{id}\""));
    }
}
