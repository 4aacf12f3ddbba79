//! Configuration for the JSON-RPC account source.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use mplx_types::{Address, MPL_HYBRID_PROGRAM_ID};

use crate::error::{ChainError, ChainResult};

/// Solana cluster selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    /// Mainnet beta
    Mainnet,
    /// Devnet (default)
    #[default]
    Devnet,
    /// Testnet
    Testnet,
    /// Local validator
    Localnet,
}

impl Cluster {
    /// Get the cluster name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::Localnet => "localnet",
        }
    }

    /// Public RPC endpoint for the cluster.
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Cluster {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "localnet" | "localhost" => Ok(Self::Localnet),
            other => Err(ChainError::config(format!("unknown cluster: {}", other))),
        }
    }
}

/// Commitment level for reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

/// Configuration for [`RpcAccountSource`](crate::RpcAccountSource).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Which cluster to read from
    pub cluster: Cluster,

    /// Explicit RPC endpoint; overrides the cluster default
    pub rpc_url: Option<String>,

    /// Commitment level for all reads
    pub commitment: Commitment,

    /// MPL-Hybrid program ID (base58)
    pub program_id: String,

    /// Per-request timeout
    #[serde(with = "millis")]
    pub timeout: Duration,
}

impl ChainConfig {
    /// Configuration for a given cluster with default settings.
    pub fn for_cluster(cluster: Cluster) -> Self {
        Self {
            cluster,
            ..Default::default()
        }
    }

    /// Configuration pointing at an explicit endpoint.
    pub fn with_rpc_url(url: impl Into<String>) -> Self {
        Self {
            rpc_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Endpoint actually used.
    pub fn endpoint(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.cluster.rpc_url())
    }

    /// Parse the program ID.
    pub fn parse_program_id(&self) -> ChainResult<Address> {
        Ok(self.program_id.parse()?)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ChainResult<()> {
        self.parse_program_id()?;

        let endpoint = self.endpoint();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ChainError::config(format!(
                "RPC endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }

        if self.timeout.is_zero() {
            return Err(ChainError::config("timeout must be greater than zero"));
        }

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::Devnet,
            rpc_url: None,
            commitment: Commitment::Confirmed,
            program_id: MPL_HYBRID_PROGRAM_ID.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Serde helper for Duration (milliseconds).
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
