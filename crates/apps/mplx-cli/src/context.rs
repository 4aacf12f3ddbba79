//! Shared state for the inspection commands.

use std::sync::Arc;

use mplx_analysis::HybridServices;
use mplx_chain::{ChainConfig, Program, RpcAccountSource};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Services and settings used by the inspection commands.
pub struct HybridContext {
    /// Recipe, escrow and fee services.
    pub services: HybridServices,
    /// Program the services read from.
    pub program_id: String,
}

impl HybridContext {
    /// Create a context over an existing program handle.
    pub fn new(program: Program) -> Self {
        Self {
            program_id: program.program_id().to_string(),
            services: HybridServices::new(program),
        }
    }

    /// Create a context talking JSON-RPC to the configured cluster.
    pub fn connect(config: &ChainConfig) -> CliResult<Self> {
        let source = RpcAccountSource::new(config)?;
        let program_id = config.parse_program_id()?;
        debug!(endpoint = %source.endpoint(), program_id = %program_id, "Connected account source");
        Ok(Self::new(Program::new(Arc::new(source), program_id)))
    }

    /// Create a context from the CLI configuration.
    pub fn from_config(config: &CliConfig) -> CliResult<Self> {
        Self::connect(&config.chain.to_chain_config())
    }
}
