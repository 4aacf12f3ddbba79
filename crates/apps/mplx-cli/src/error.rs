//! CLI error types.

use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed address or operation.
    #[error("{0}")]
    Analysis(#[from] mplx_analysis::AnalysisError),

    /// Chain access error.
    #[error("{0}")]
    Chain(#[from] mplx_chain::ChainError),

    /// MCP server error.
    #[error("{0}")]
    Mcp(#[from] mplx_mcp::McpError),

    /// Server exited with an error.
    #[error("Server error: {0}")]
    Server(String),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::Analysis(_) => 1,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // Chain errors: 5
            Self::Chain(_) => 5,
            // Server errors: 6
            Self::Mcp(_) | Self::Server(_) => 6,
            // IO errors: 9
            Self::Io(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// A recovery hint for the user, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Analysis(e) if e.is_address_error() => {
                Some("Addresses are base58-encoded 32-byte public keys.")
            }
            Self::Analysis(_) => Some("Valid operations are 'capture' and 'release'."),
            Self::Config(_) | Self::Toml(_) => {
                Some("Check the configuration file passed with --config.")
            }
            Self::Chain(_) => Some("Check the RPC endpoint with --cluster or --rpc-url."),
            _ => None,
        }
    }
}
