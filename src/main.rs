use anyhow::Result;
use contact_profiler::{config::Config, server::ContactProfilerServer};
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // stdout carries the MCP protocol, so logs go to stderr
    if !config.runtime.mcp_no_log {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(&config.runtime.log_level))
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .init();
    }

    info!(
        "Starting {} MCP server v{} (default format: {})",
        config.server.name,
        config.server.version,
        config.presentation.default_format.as_str()
    );

    let server = ContactProfilerServer::new(&config);
    let service = server.serve(stdio()).await.map_err(|e| {
        eprintln!("Failed to start MCP service: {}", e);
        e
    })?;

    info!("MCP server ready, waiting for requests");
    service.waiting().await?;

    Ok(())
}
