//! MCP server for the MPL-Hybrid program.
//!
//! Exposes recipe analysis, escrow validation, conversion status and fee
//! calculation as MCP tools over an injected account source.

use std::sync::Arc;

use mplx_analysis::HybridServices;
use mplx_chain::{AccountSource, ChainConfig, Program, RpcAccountSource};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{McpError as MplxMcpError, McpResult};
use crate::tools::{
    AnalyzeRecipeInput, CalculateFeesInput, CheckConversionStatusInput, DeriveRecipeAddressInput,
    DeriveRecipeAddressOutput, ValidateEscrowInput,
};

/// Serialize a tool result as pretty JSON text content.
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// MPL-Hybrid MCP server.
#[derive(Clone)]
pub struct HybridMcpServer {
    /// Recipe, escrow and fee services.
    services: HybridServices,
    /// Program the services read from.
    program_id: String,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HybridMcpServer {
    /// Create a server over an existing program handle.
    pub fn new(program: Program) -> Self {
        let program_id = program.program_id().to_string();
        Self {
            services: HybridServices::new(program),
            program_id,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server reading from any account source.
    pub fn with_source(source: Arc<dyn AccountSource>, config: &ChainConfig) -> McpResult<Self> {
        let program_id = config.parse_program_id()?;
        Ok(Self::new(Program::new(source, program_id)))
    }

    /// Create a server talking JSON-RPC to the configured cluster.
    pub fn from_config(config: &ChainConfig) -> McpResult<Self> {
        let source = RpcAccountSource::new(config)?;
        info!(endpoint = %source.endpoint(), "Using RPC account source");
        Self::with_source(Arc::new(source), config)
    }

    #[tool(
        description = "Analyze an MPL-Hybrid recipe. Derives the recipe account from the collection address, fetches it and checks its bounds and fee settings. Returns the recipe configuration with isValid and any issues."
    )]
    async fn analyze_recipe(
        &self,
        Parameters(input): Parameters<AnalyzeRecipeInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(collection = %input.collection, "Processing analyze_recipe request");

        let analysis = self
            .services
            .recipes
            .analyze(&input.collection)
            .await
            .map_err(MplxMcpError::from)?;

        json_result(&analysis)
    }

    #[tool(
        description = "Validate an MPL-Hybrid escrow account by address. Checks max/min bounds, the swap amount and the fee settings. Returns the escrow configuration with isValid and any issues."
    )]
    async fn validate_escrow(
        &self,
        Parameters(input): Parameters<ValidateEscrowInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            collection = %input.collection,
            escrow = %input.escrow,
            "Processing validate_escrow request"
        );

        let validation = self
            .services
            .escrows
            .validate_escrow(&input.collection, &input.escrow)
            .await
            .map_err(MplxMcpError::from)?;

        json_result(&validation)
    }

    #[tool(
        description = "Check whether an asset is currently locked in an MPL-Hybrid escrow. Returns the current owner and, when locked, the escrow account, token amount, last operation and timestamp."
    )]
    async fn check_conversion_status(
        &self,
        Parameters(input): Parameters<CheckConversionStatusInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(asset = %input.asset, "Processing check_conversion_status request");

        let status = self
            .services
            .escrows
            .check_conversion_status(&input.asset)
            .await
            .map_err(MplxMcpError::from)?;

        json_result(&status)
    }

    #[tool(
        description = "Calculate protocol and project fees for a capture (tokens for NFT) or release (NFT for tokens) of the given token amount. Returns token and SOL fee breakdowns."
    )]
    async fn calculate_fees(
        &self,
        Parameters(input): Parameters<CalculateFeesInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            operation = %input.operation,
            amount = input.amount,
            "Processing calculate_fees request"
        );

        let fees = self
            .services
            .fees
            .calculate_fees_str(&input.operation, input.amount)
            .await
            .map_err(MplxMcpError::from)?;

        json_result(&fees)
    }

    #[tool(
        description = "Derive the recipe account address for a collection without fetching it."
    )]
    async fn derive_recipe_address(
        &self,
        Parameters(input): Parameters<DeriveRecipeAddressInput>,
    ) -> Result<CallToolResult, McpError> {
        let (recipe, bump) = self
            .services
            .recipes
            .recipe_address(&input.collection)
            .map_err(MplxMcpError::from)?;

        json_result(&DeriveRecipeAddressOutput {
            collection: input.collection,
            recipe: recipe.to_string(),
            bump,
            program_id: self.program_id.clone(),
        })
    }
}

#[tool_handler]
impl rmcp::ServerHandler for HybridMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "MPL-Hybrid MCP Server - Inspect MPL-Hybrid (404) swaps on Solana. \
                 Use `analyze_recipe` with a collection address to check its swap configuration, \
                 `validate_escrow` for a specific escrow account, `check_conversion_status` to see \
                 whether an asset is locked, and `calculate_fees` to price a capture or release."
                    .into(),
            ),
        }
    }
}
