//! MCP (Model Context Protocol) servers for Metaplex.
//!
//! This crate provides two stdio MCP servers:
//!
//! - **Hybrid server** ([`HybridMcpServer`]): read-only tools over the
//!   MPL-Hybrid program's on-chain state
//!   - `analyze_recipe`, `validate_escrow`, `check_conversion_status`
//!   - `calculate_fees`, `derive_recipe_address`
//! - **Docs server** ([`DocsMcpServer`]): Metaplex repositories on GitHub
//!   - `get_repo`, `search_code`
//!   - resource template `metaplex://repos/{repo}/files/{path}`
//!
//! # Usage
//!
//! The servers are typically started via the CLI:
//!
//! ```bash
//! mplx hybrid-server --cluster devnet
//! mplx docs-server
//! ```
//!
//! Or configured in an MCP client:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "mpl-hybrid": {
//!       "command": "mplx",
//!       "args": ["hybrid-server"]
//!     }
//!   }
//! }
//! ```
//!
//! # Errors
//!
//! Malformed tool arguments (bad addresses, unknown operations) are MCP
//! `invalid_params` errors. Chain failures are reported inside the
//! returned record's `issues` rather than as errors.

pub mod docs;
pub mod error;
pub mod github;
pub mod hybrid;
pub mod server;
pub mod tools;

pub use docs::DocsMcpServer;
pub use error::{GithubError, GithubResult, McpError, McpResult};
pub use github::{GithubClient, GithubConfig};
pub use hybrid::HybridMcpServer;
pub use server::{run_docs_server, run_hybrid_server, serve_stdio, DEFAULT_CONNECT_TIMEOUT};
