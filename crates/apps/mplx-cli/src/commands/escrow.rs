//! Validate an escrow account.

use tracing::info;

use crate::context::HybridContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the escrow command.
pub async fn escrow(
    ctx: &HybridContext,
    format: OutputFormat,
    collection: &str,
    escrow: &str,
) -> CliResult<String> {
    let validation = ctx.services.escrows.validate_escrow(collection, escrow).await?;
    info!(escrow = %escrow, valid = validation.is_valid, "Escrow validated");
    Ok(validation.render(format))
}
