//! CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use mplx_chain::{ChainConfig, Cluster, Commitment};
use mplx_mcp::GithubConfig;
use mplx_types::MPL_HYBRID_PROGRAM_ID;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Expand environment variables in a string.
/// Supports `${VAR_NAME}` syntax. Unset variables are left as written.
fn expand_env_vars(input: &str) -> CliResult<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| CliError::config(format!("invalid expansion pattern: {}", e)))?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string())
}

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Chain access configuration.
    pub chain: ChainSection,
    /// GitHub access configuration.
    pub github: GithubConfig,
    /// MCP server configuration.
    pub server: ServerSection,
}

impl CliConfig {
    /// Load configuration from a file.
    /// Environment variables in `${VAR}` format are expanded in the RPC URL
    /// and the GitHub token. A missing file yields the defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;

        if let Some(url) = &config.chain.rpc_url {
            config.chain.rpc_url = Some(expand_env_vars(url)?);
        }
        if let Some(token) = &config.github.token {
            config.github.token = Some(expand_env_vars(token)?);
        }

        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default() -> CliResult<Self> {
        Self::load(&default_config_path())
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// `[chain]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainSection {
    /// Cluster to read from.
    pub cluster: Cluster,
    /// Explicit RPC endpoint, overriding the cluster default.
    pub rpc_url: Option<String>,
    /// Commitment level for reads.
    pub commitment: Commitment,
    /// MPL-Hybrid program ID.
    pub program_id: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ChainSection {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            rpc_url: None,
            commitment: Commitment::Confirmed,
            program_id: MPL_HYBRID_PROGRAM_ID.to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl ChainSection {
    /// Build the chain client configuration.
    pub fn to_chain_config(&self) -> ChainConfig {
        ChainConfig {
            cluster: self.cluster,
            rpc_url: self.rpc_url.clone(),
            commitment: self.commitment,
            program_id: self.program_id.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Seconds to wait for an MCP client to connect.
    pub connect_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 30,
        }
    }
}

impl ServerSection {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Get the default config directory.
pub fn default_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "metaplex", "mplx")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mplx"))
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}
