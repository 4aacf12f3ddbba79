//! MCP server for Metaplex repositories on GitHub.
//!
//! Exposes repository lookup and code search as tools, and repository
//! files as a resource template.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::{RequestContext, RoleServer},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use tracing::{debug, info, warn};

use crate::error::{GithubError, McpError as MplxMcpError, McpResult};
use crate::github::{GithubClient, GithubConfig};
use crate::tools::{GetRepoInput, SearchCodeInput};

/// URI prefix for repository file resources.
pub const REPO_URI_PREFIX: &str = "metaplex://repos/";

/// Full resource template for repository files.
pub const REPO_FILE_TEMPLATE: &str = "metaplex://repos/{repo}/files/{path}";

/// Split a `metaplex://repos/{repo}/files/{path}` URI into `(repo, path)`.
pub fn parse_repo_file_uri(uri: &str) -> McpResult<(&str, &str)> {
    let rest = uri
        .strip_prefix(REPO_URI_PREFIX)
        .ok_or_else(|| MplxMcpError::InvalidUri(format!("expected '{}' prefix: {}", REPO_URI_PREFIX, uri)))?;

    let (repo, path) = rest
        .split_once("/files/")
        .ok_or_else(|| MplxMcpError::InvalidUri(format!("missing '/files/' segment: {}", uri)))?;

    if repo.is_empty() || repo.contains('/') || path.is_empty() {
        return Err(MplxMcpError::InvalidUri(format!(
            "expected {}: {}",
            REPO_FILE_TEMPLATE, uri
        )));
    }

    Ok((repo, path))
}

/// Map a GitHub client failure to a protocol error.
fn github_failure(context: &str, e: GithubError) -> McpError {
    if e.is_invalid_argument() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(format!("{}: {}", context, e), None)
    }
}

/// Metaplex docs MCP server.
#[derive(Clone)]
pub struct DocsMcpServer {
    /// GitHub API client.
    github: GithubClient,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocsMcpServer {
    /// Create a new docs server.
    pub fn new(config: GithubConfig) -> McpResult<Self> {
        info!(
            api_url = %config.api_url,
            org = %config.org,
            authenticated = config.token.is_some(),
            "Creating docs server"
        );

        Ok(Self {
            github: GithubClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        description = "Get details of a Metaplex repository on GitHub: name, description, stars, forks and URL. Defaults to metaplex-program-library."
    )]
    async fn get_repo(
        &self,
        Parameters(input): Parameters<GetRepoInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(repo = ?input.repo, "Processing get_repo request");

        let repo = self.github.get_repo(input.repo.as_deref()).await.map_err(|e| {
            warn!(error = %e, "get_repo failed");
            github_failure("Failed to fetch repository", e)
        })?;

        let json = serde_json::to_string_pretty(&repo)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "Search code in Metaplex repositories on GitHub. Searches every repository in the organisation unless `repo` is given. Returns file paths, repositories and URLs."
    )]
    async fn search_code(
        &self,
        Parameters(input): Parameters<SearchCodeInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(query = %input.query, repo = ?input.repo, "Processing search_code request");

        if input.query.trim().is_empty() {
            return Err(MplxMcpError::invalid_input("Invalid query parameter").into());
        }

        let hits = self
            .github
            .search_code(&input.query, input.repo.as_deref())
            .await
            .map_err(|e| {
                warn!(error = %e, "search_code failed");
                github_failure("Failed to search code", e)
            })?;

        info!(query = %input.query, hits = hits.len(), "Code search completed");

        let json = serde_json::to_string_pretty(&hits)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for DocsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Metaplex MCP Server - Explore Metaplex Foundation repositories. \
                 Use `get_repo` for repository details and `search_code` to find code. \
                 Read files directly via `metaplex://repos/{repo}/files/{path}` resources."
                    .into(),
            ),
        }
    }

    /// List available resource templates.
    ///
    /// Exposes the `metaplex://repos/{repo}/files/{path}` URI template.
    #[allow(clippy::manual_async_fn)]
    fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_
    {
        async move {
            let template = RawResourceTemplate {
                uri_template: REPO_FILE_TEMPLATE.to_string(),
                name: "repository-file".to_string(),
                title: Some("Metaplex Repository File".to_string()),
                description: Some("Access files from Metaplex repositories".to_string()),
                mime_type: Some("text/plain".to_string()),
            };

            Ok(ListResourceTemplatesResult {
                resource_templates: vec![Annotated::new(template, None)],
                next_cursor: None,
            })
        }
    }

    /// Read a repository file by URI.
    #[allow(clippy::manual_async_fn)]
    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            let uri = &request.uri;
            debug!(uri = %uri, "Reading repository file");

            let (repo, path) = parse_repo_file_uri(uri)?;

            let text = self.github.get_file(repo, path).await.map_err(|e| {
                if e.is_not_found() {
                    McpError::resource_not_found(format!("File not found: {}", uri), None)
                } else {
                    github_failure("Failed to fetch file", e)
                }
            })?;

            info!(uri = %uri, bytes = text.len(), "Resource read successfully");

            Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri.clone())],
            })
        }
    }
}
