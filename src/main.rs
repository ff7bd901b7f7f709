//! Audius MCP Examples Entry Point
//!
//! Prints example MCP requests for the Audius server. Usage:
//!
//! ```text
//! audius-mcp-examples [--env-file PATH] [catalog | list | all | SCENARIO...]
//! ```
//!
//! With no scenario names the default walkthroughs run in order.

use anyhow::{Context, Result, bail};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use audius_mcp_examples::core::config::LoggingConfig;
use audius_mcp_examples::core::{Config, ExampleWriter, McpClient};
use audius_mcp_examples::domains::scenarios::{self, ScenarioRunner};

#[tokio::main]
async fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // Load configuration from the environment or an explicit dotenv file
    let env_file = take_env_file(&mut args)?;
    let config = match &env_file {
        Some(path) => Config::from_env_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => Config::from_env(),
    };

    init_logging(&config.logging);

    info!("{} v{}", env!("CARGO_PKG_NAME"), config.server.version);
    if let Some(path) = &env_file {
        info!("Configuration loaded from {}", path);
    }
    info!("Target server: {} at {}", config.server.name, config.server.url);
    info!("Output: {}", config.output.description());

    let format = config.output.format;
    let runner = ScenarioRunner::new(McpClient::new(config));
    let mut writer = ExampleWriter::new(tokio::io::stdout(), format);

    match args.first().map(String::as_str) {
        Some("catalog") => runner.catalog(&mut writer).await?,
        Some("list") => {
            for name in scenarios::scenario_names() {
                writer.line(name).await?;
            }
            writer.flush().await?;
        }
        _ => {
            let selected = scenarios::select(&args)?;
            runner.run(&selected, &mut writer).await?;
        }
    }

    Ok(())
}

/// Remove `--env-file PATH` from the arguments, returning the path.
fn take_env_file(args: &mut Vec<String>) -> Result<Option<String>> {
    let Some(index) = args.iter().position(|a| a == "--env-file") else {
        return Ok(None);
    };
    if index + 1 >= args.len() {
        bail!("--env-file requires a path");
    }
    let path = args.remove(index + 1);
    args.remove(index);
    Ok(Some(path))
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so stdout carries only the printed examples.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
