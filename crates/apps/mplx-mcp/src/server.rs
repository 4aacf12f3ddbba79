//! Stdio entry points for the MCP servers.

use std::time::Duration;

use mplx_chain::ChainConfig;
use rmcp::{transport::stdio, ServerHandler, ServiceExt};
use tracing::info;

use crate::docs::DocsMcpServer;
use crate::error::McpError;
use crate::github::GithubConfig;
use crate::hybrid::HybridMcpServer;

/// How long to wait for a client to complete the MCP handshake.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Serve `server` on stdio until the client disconnects.
///
/// Fails if no client completes the handshake within `connect_timeout`.
pub async fn serve_stdio<S>(
    server: S,
    connect_timeout: Duration,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    S: ServerHandler,
{
    info!("Attempting to connect to MCP client...");

    let service = match tokio::time::timeout(connect_timeout, server.serve(stdio())).await {
        Ok(Ok(service)) => service,
        Ok(Err(e)) => {
            // stdin closed before the handshake finished
            info!("MCP transport closed during setup: {}", e);
            return Ok(());
        }
        Err(_) => return Err(McpError::ConnectTimeout(connect_timeout).into()),
    };

    info!("MCP server connected, ready to handle requests");

    // Client disconnect (stdin EOF) is a normal exit.
    if let Err(e) = service.waiting().await {
        info!("MCP transport closed: {}", e);
    }

    info!("MCP server stopped");
    Ok(())
}

/// Run the MPL-Hybrid server on stdio.
pub async fn run_hybrid_server(
    config: ChainConfig,
    connect_timeout: Duration,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(
        cluster = %config.cluster,
        endpoint = %config.endpoint(),
        program_id = %config.program_id,
        "Starting MPL-Hybrid MCP server"
    );

    let server = HybridMcpServer::from_config(&config)?;
    serve_stdio(server, connect_timeout).await
}

/// Run the Metaplex docs server on stdio.
pub async fn run_docs_server(
    config: GithubConfig,
    connect_timeout: Duration,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(org = %config.org, "Starting Metaplex docs MCP server");

    let server = DocsMcpServer::new(config)?;
    serve_stdio(server, connect_timeout).await
}
