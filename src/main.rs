//! SSN Validator - Main entry point
//!
//! Serves the SSN validation tools over the Model Context Protocol (stdio).

use anyhow::Result;
use ssn_validator::{Config, Metrics, SsnMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let validator = Arc::new(config.build_validator()?);
    info!(
        "Extra denylist entries: {}, max batch size: {}",
        validator.denylist().extra_len(),
        config.max_batch_size
    );

    let server = SsnMcpServer::new(validator, Metrics::new(), config.max_batch_size);

    info!("Starting MCP server with stdio transport");
    ssn_validator::server::run_server(server).await?;

    info!("SSN validator shutdown complete");
    Ok(())
}
