//! Error types for the MCP servers.

use std::time::Duration;

use mplx_analysis::AnalysisError;
use mplx_chain::ChainError;
use rmcp::ErrorData;
use thiserror::Error;

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpError>;

/// Result type for GitHub API calls.
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors from the GitHub REST API client.
#[derive(Debug, Error)]
pub enum GithubError {
    /// GitHub answered with a non-success status.
    ///
    /// `message` is GitHub's own `message` field when present.
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// HTTP-level failure reaching GitHub.
    #[error("{0}")]
    Transport(String),

    /// GitHub answered with something we could not interpret.
    #[error("invalid GitHub response: {0}")]
    InvalidResponse(String),

    /// A repository name or file path that cannot be placed in a request URL.
    #[error("{0}")]
    InvalidArgument(String),
}

impl GithubError {
    /// Whether GitHub reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }

    /// Whether the request was refused before reaching GitHub.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<reqwest::Error> for GithubError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Error types for MCP server operations.
#[derive(Debug, Error)]
pub enum McpError {
    /// A tool argument was missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// Input rejected by an analysis service.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Resource URI did not match a known template.
    #[error("invalid resource URI: {0}")]
    InvalidUri(String),

    /// GitHub API error.
    #[error(transparent)]
    Github(#[from] GithubError),

    /// Chain configuration or connection error.
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No client connected within the connect timeout.
    #[error("MCP connection timed out after {} seconds", .0.as_secs())]
    ConnectTimeout(Duration),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller sent bad arguments.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::Analysis(_)
                | Self::InvalidUri(_)
                | Self::Github(GithubError::InvalidArgument(_))
        )
    }

    /// Convert to the protocol-level error returned to the client.
    pub fn to_error_data(&self) -> ErrorData {
        if self.is_input_error() {
            ErrorData::invalid_params(self.to_string(), None)
        } else {
            ErrorData::internal_error(self.to_string(), None)
        }
    }
}

impl From<McpError> for ErrorData {
    fn from(e: McpError) -> Self {
        e.to_error_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mplx_types::AddressError;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_address_error_is_invalid_params() {
        let err: McpError = AnalysisError::from(AddressError::InvalidLength(3)).into();
        assert!(err.is_input_error());
        assert_eq!(err.to_error_data().code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_github_error_is_internal() {
        let err: McpError = GithubError::Api {
            status: 404,
            message: "Not Found".to_string(),
        }
        .into();
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "Not Found");
        assert_eq!(err.to_error_data().code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_rejected_github_argument_is_invalid_params() {
        let err: McpError = GithubError::InvalidArgument("invalid repository name: ../users".to_string()).into();
        assert!(err.is_input_error());
        assert_eq!(err.to_error_data().code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_connect_timeout_display() {
        let err = McpError::ConnectTimeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "MCP connection timed out after 30 seconds");
    }
}
