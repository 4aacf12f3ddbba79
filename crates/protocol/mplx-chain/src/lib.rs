//! Chain access for the MPL-Hybrid MCP servers.
//!
//! This crate sits between the analysis services and a Solana cluster.
//! Services never talk to a node directly; they go through the
//! [`AccountSource`] trait, which keeps them testable against an
//! in-memory source.
//!
//! # Overview
//!
//! - **AccountSource**: read one account, or list a program's accounts
//!   with `memcmp`/`dataSize` filters
//! - **RpcAccountSource**: JSON-RPC implementation over HTTP
//! - **Program**: typed view that decodes accounts via [`AccountLayout`]
//! - **Codec**: hand-written layouts for `RecipeV1`, `EscrowV1` and `AssetV1`
//!
//! # Architecture
//!
//! ```text
//! mplx-analysis                 mplx-chain
//! ┌────────────────┐         ┌─────────────────────────┐
//! │ RecipeAnalyzer │         │ Program                 │
//! │ EscrowValidator│ ──────► │   └─ AccountLayout      │
//! └────────────────┘         │ AccountSource (trait)   │
//!                            │   └─ RpcAccountSource   │
//!                            └───────────┬─────────────┘
//!                                        │
//!                                        ▼
//!                            ┌─────────────────────────┐
//!                            │ Solana JSON-RPC node    │
//!                            └─────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mplx_chain::{ChainConfig, Program, RpcAccountSource};
//! use mplx_types::{Address, RecipeV1};
//!
//! # async fn example() -> mplx_chain::ChainResult<()> {
//! let config = ChainConfig::default();
//! let source = RpcAccountSource::new(&config)?;
//! let program = Program::new(Arc::new(source), config.parse_program_id()?);
//!
//! let recipe_address: Address = "11111111111111111111111111111111".parse()?;
//! let recipe: RecipeV1 = program.fetch(&recipe_address).await?;
//! println!("{} has {} conversions", recipe.name, recipe.count);
//! # Ok(())
//! # }
//! ```

mod codec;
mod config;
mod error;
mod filter;
mod program;
mod rpc;
mod traits;

pub use codec::{account_discriminator, AccountLayout};
pub use config::{ChainConfig, Cluster, Commitment};
pub use error::{ChainError, ChainResult, DecodeError};
pub use filter::AccountFilter;
pub use program::{Program, ProgramAccount};
pub use rpc::RpcAccountSource;
pub use traits::{AccountInfo, AccountSource, KeyedAccount};
