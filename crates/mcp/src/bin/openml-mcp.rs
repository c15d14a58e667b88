// Standalone MCP server binary

use anyhow::Result;
use clap::Parser;
use openml_mcp::config::McpConfig;
use openml_mcp::server::McpServer;
use openml_mcp::tools::{register_openml_tools, ToolRegistry};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "openml-mcp")]
#[command(about = "MCP server exposing the OpenML REST API as agent tools", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "openml-mcp.toml")]
    config: PathBuf,

    /// OpenML API key (unauthenticated requests when absent)
    #[arg(long, env = "OPENML_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OpenML API base URL
    #[arg(long, env = "OPENML_API_BASE")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Retries for connection-level failures
    #[arg(long)]
    max_retries: Option<u32>,
}

impl Args {
    fn apply_to(self, config: &mut McpConfig) {
        let settings = &mut config.openml;
        if let Some(api_key) = self.api_key {
            settings.api_key = Some(api_key);
        }
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.timeout_secs = timeout_secs;
        }
        if let Some(max_retries) = self.max_retries {
            settings.max_retries = max_retries;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("OpenML MCP Server starting...");

    let mut config = McpConfig::load(&args.config)?;
    args.apply_to(&mut config);

    let client = config.build_client()?;
    tracing::info!(
        base_url = %client.config().base_url,
        authenticated = client.config().api_key.is_some(),
        "OpenML client ready"
    );

    let mut registry = ToolRegistry::new();
    register_openml_tools(&mut registry, &client);

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.start().await?;

    Ok(())
}
