//! Calculate capture or release fees.

use tracing::info;

use crate::context::HybridContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the fees command.
pub async fn fees(
    ctx: &HybridContext,
    format: OutputFormat,
    operation: &str,
    amount: f64,
) -> CliResult<String> {
    let calculation = ctx.services.fees.calculate_fees_str(operation, amount).await?;
    info!(
        operation = %calculation.operation,
        amount = amount,
        total = calculation.token_fees.total,
        "Fees calculated"
    );
    Ok(calculation.render(format))
}
