//! GitHub REST API client for the docs server.
//!
//! Covers the three calls the docs server needs:
//! - repository details (`GET /repos/{org}/{repo}`)
//! - code search (`GET /search/code`)
//! - raw file contents (`GET /repos/{org}/{repo}/contents/{path}`)

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GithubError, GithubResult};
use crate::tools::{CodeSearchHit, RepoSummary};

/// Default GitHub API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Organisation whose repositories are served.
pub const METAPLEX_ORG: &str = "metaplex-foundation";

/// Repository used when `get_repo` is called without one.
pub const DEFAULT_REPO: &str = "metaplex-program-library";

/// Media type for raw file contents.
const RAW_MEDIA_TYPE: &str = "application/vnd.github.raw";

/// Media type for JSON responses.
const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";

/// GitHub client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// API base URL
    pub api_url: String,
    /// Organisation to query
    pub org: String,
    /// Repository used when none is given
    pub default_repo: String,
    /// Optional personal access token
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            org: METAPLEX_ORG.to_string(),
            default_repo: DEFAULT_REPO.to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Client for the GitHub REST API.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    config: GithubConfig,
}

impl GithubClient {
    /// Create a new client.
    pub fn new(config: GithubConfig) -> GithubResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("mplx-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GithubError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: GithubConfig {
                api_url: config.api_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GithubConfig {
        &self.config
    }

    /// Fetch repository details. `None` means the default repository.
    pub async fn get_repo(&self, repo: Option<&str>) -> GithubResult<RepoSummary> {
        let repo = check_repo(repo.unwrap_or(&self.config.default_repo))?;
        let url = format!("{}/repos/{}/{}", self.config.api_url, self.config.org, repo);
        debug!(url = %url, "Fetching repository");

        let response = self.send(self.get(&url, JSON_MEDIA_TYPE)).await?;
        let data: RepoResponse = response.json().await?;

        Ok(RepoSummary {
            name: data.name,
            description: data.description,
            stars: data.stargazers_count,
            forks: data.forks_count,
            url: data.html_url,
        })
    }

    /// Search code in one repository, or across the organisation.
    pub async fn search_code(&self, query: &str, repo: Option<&str>) -> GithubResult<Vec<CodeSearchHit>> {
        let repo = match repo {
            Some(repo) => check_repo(repo)?,
            None => "*",
        };
        let q = format!("{} repo:{}/{}", query, self.config.org, repo);
        let url = format!("{}/search/code", self.config.api_url);
        debug!(q = %q, "Searching code");

        let response = self
            .send(self.get(&url, JSON_MEDIA_TYPE).query(&[("q", q.as_str())]))
            .await?;
        let data: SearchResponse = response.json().await?;

        Ok(data
            .items
            .into_iter()
            .map(|item| CodeSearchHit {
                path: item.path,
                repository: item.repository.full_name,
                url: item.html_url,
            })
            .collect())
    }

    /// Fetch a file's raw contents.
    pub async fn get_file(&self, repo: &str, path: &str) -> GithubResult<String> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_url,
            self.config.org,
            check_repo(repo)?,
            check_path(path)?
        );
        debug!(url = %url, "Fetching file contents");

        let response = self.send(self.get(&url, RAW_MEDIA_TYPE)).await?;
        Ok(response.text().await?)
    }

    fn get(&self, url: &str, accept: &str) -> RequestBuilder {
        let request = self.client.get(url).header(header::ACCEPT, accept);
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> GithubResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| format!("GitHub returned {}", status));

        warn!(status = status.as_u16(), message = %message, "GitHub request failed");
        Err(GithubError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Accept only names GitHub allows for repositories.
fn check_repo(repo: &str) -> GithubResult<&str> {
    let valid = !repo.is_empty()
        && !repo.chars().all(|c| c == '.')
        && repo
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(repo)
    } else {
        Err(GithubError::InvalidArgument(format!("invalid repository name: {}", repo)))
    }
}

/// Accept a relative file path whose segments stay inside the repository.
///
/// A leading `/` is dropped. Empty, `.` and `..` segments are refused, as are
/// characters that would end the path part of the URL or be decoded by GitHub.
fn check_path(path: &str) -> GithubResult<&str> {
    let path = path.trim_start_matches('/');
    let valid = !path.is_empty()
        && !path.contains(['?', '#', '%', '\\'])
        && path
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if valid {
        Ok(path)
    } else {
        Err(GithubError::InvalidArgument(format!("invalid file path: {}", path)))
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RepoResponse {
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    path: String,
    html_url: String,
    repository: SearchRepository,
}

#[derive(Debug, Deserialize)]
struct SearchRepository {
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
