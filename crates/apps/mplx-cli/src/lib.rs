//! Command-line interface for the Metaplex MCP servers.
//!
//! This crate provides the `mplx` binary. It includes commands for:
//!
//! - **Servers**: run the MPL-Hybrid or docs MCP server on stdio
//! - **Inspection**: analyze a recipe, validate an escrow, check whether an
//!   asset is locked, calculate fees, derive a recipe address
//!
//! # Quick Start
//!
//! ```bash
//! # Serve MPL-Hybrid tools to an MCP client
//! mplx hybrid-server --cluster mainnet
//!
//! # Check a collection's recipe once
//! mplx recipe <COLLECTION> --format json
//!
//! # Price a capture of 1000 tokens
//! mplx fees capture 1000
//! ```
//!
//! # Output Formats
//!
//! All inspection commands support `--format`:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: the same JSON the MCP tools return
//!
//! # Configuration
//!
//! Configuration is loaded from `config.toml` in the platform config
//! directory. Override with `--config`. `--cluster` and `--rpc-url` take
//! precedence over the file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, OutputFormatArg};
pub use config::CliConfig;
pub use context::HybridContext;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
