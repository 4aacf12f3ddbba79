//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use mplx_chain::Cluster;

use crate::output::OutputFormat;

/// Metaplex MCP CLI.
#[derive(Parser, Debug)]
#[command(name = "mplx")]
#[command(version)]
#[command(about = "MCP servers and inspection tools for Metaplex and MPL-Hybrid")]
#[command(
    long_about = "Runs the Metaplex MCP servers on stdio, or runs a single MPL-Hybrid check and prints the result.\n\nRun 'mplx hybrid-server' from an MCP client configuration."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Solana cluster (mainnet, devnet, testnet, localnet).
    #[arg(long, global = true, env = "MPLX_CLUSTER")]
    pub cluster: Option<Cluster>,

    /// RPC endpoint, overriding the cluster default.
    #[arg(long, global = true, env = "MPLX_RPC_URL")]
    pub rpc_url: Option<String>,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // =========================================================================
    // Server Commands
    // =========================================================================
    /// Start the MPL-Hybrid MCP server on stdio.
    ///
    /// Exposes recipe analysis, escrow validation, conversion status and
    /// fee calculation as MCP tools.
    HybridServer {
        /// Seconds to wait for a client to connect.
        #[arg(long)]
        connect_timeout: Option<u64>,
    },

    /// Start the Metaplex docs MCP server on stdio.
    ///
    /// Exposes Metaplex GitHub repositories as tools and resources.
    DocsServer {
        /// GitHub token for higher rate limits.
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Seconds to wait for a client to connect.
        #[arg(long)]
        connect_timeout: Option<u64>,
    },

    // =========================================================================
    // Inspection Commands
    // =========================================================================
    /// Analyze the recipe of a collection.
    Recipe {
        /// Collection address (base58).
        collection: String,
    },

    /// Validate an escrow account.
    Escrow {
        /// Collection address (base58).
        collection: String,

        /// Escrow account address (base58).
        escrow: String,
    },

    /// Check whether an asset is locked in an escrow.
    Status {
        /// Asset address (base58).
        asset: String,
    },

    /// Calculate the fees of a capture or release.
    Fees {
        /// Operation: capture or release.
        operation: String,

        /// Token amount.
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },

    /// Derive the recipe address of a collection.
    Derive {
        /// Collection address (base58).
        collection: String,
    },
}

impl Commands {
    /// Whether the command runs an MCP server on stdio.
    pub fn is_server(&self) -> bool {
        matches!(self, Self::HybridServer { .. } | Self::DocsServer { .. })
    }
}
