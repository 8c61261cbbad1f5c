//! Sinch MCP server entry point.
//!
//! Initializes logging, loads configuration and serves over the configured
//! transport.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use sinch_mcp_server::core::config::LoggingConfig;
use sinch_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so configuration warnings are visible.
    dotenvy::dotenv().ok();
    init_logging(&LoggingConfig::from_env().level);

    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);
    log_sinch_setup(&config);

    let server = McpServer::new(config.clone())?;

    TransportService::new(config.transport).run(server).await?;

    info!("Server shutting down");

    Ok(())
}

fn log_sinch_setup(config: &Config) {
    let sinch = &config.sinch;
    if !sinch.is_usable() {
        warn!(
            "No usable Sinch configuration; every Sinch tool will fail until \
             SINCH_PROJECTS or SINCH_SERVICE_PLAN_ID/SINCH_API_TOKEN are set"
        );
        return;
    }

    info!("Sinch projects: {}", sinch.project_names().join(", "));

    let parents = sinch.parent_project_ids();
    if !parents.is_empty() {
        info!("Parent projects for sub-project management: {}", parents.len());
    }
}

/// Log to stderr so the STDIO transport keeps stdout for protocol messages.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
