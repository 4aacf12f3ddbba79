//! Docs MCP server command implementation.
//!
//! Starts the Metaplex docs MCP server on stdio.

use std::time::Duration;

use mplx_mcp::run_docs_server;
use tracing::info;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Start the docs MCP server.
///
/// A token given on the command line replaces the configured one.
pub async fn docs_server(
    config: CliConfig,
    token: Option<String>,
    connect_timeout: Option<u64>,
) -> CliResult<String> {
    let mut github = config.github.clone();
    if token.is_some() {
        github.token = token;
    }

    let connect_timeout = connect_timeout
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.server.connect_timeout());

    info!(
        org = %github.org,
        authenticated = github.token.is_some(),
        "Starting docs MCP server"
    );

    run_docs_server(github, connect_timeout)
        .await
        .map_err(|e| CliError::Server(e.to_string()))?;

    Ok("MCP server stopped.".to_string())
}
