//! MPL-Hybrid MCP server command implementation.
//!
//! Starts the MPL-Hybrid MCP server on stdio.

use std::time::Duration;

use mplx_mcp::run_hybrid_server;
use tracing::info;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Start the MPL-Hybrid MCP server.
///
/// Blocks until the client disconnects.
pub async fn hybrid_server(config: CliConfig, connect_timeout: Option<u64>) -> CliResult<String> {
    let chain = config.chain.to_chain_config();
    chain.validate()?;

    let connect_timeout = connect_timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.server.connect_timeout());

    info!(
        cluster = %chain.cluster,
        connect_timeout_secs = connect_timeout.as_secs(),
        "Starting MPL-Hybrid MCP server"
    );

    run_hybrid_server(chain, connect_timeout)
        .await
        .map_err(|e| CliError::Server(e.to_string()))?;

    Ok("MCP server stopped.".to_string())
}
