//! Fee calculation for capture and release swaps.
//!
//! Every swap pays the protocol a token fee proportional to the amount plus
//! a flat SOL fee. The project fee comes from the first fee configuration
//! the program lists: recipes for capture, escrows for release.

use mplx_chain::{ChainResult, Program};
use mplx_types::{
    EscrowV1, FeeBreakdown, FeeCalculation, Operation, RecipeV1, PROTOCOL_SOL_FEE,
    PROTOCOL_TOKEN_FEE_RATE,
};
use tracing::{debug, info, warn};

use crate::checks::AMOUNT_NOT_POSITIVE;
use crate::error::AnalysisResult;

/// Prefix for issues raised when the fee configuration cannot be listed.
pub const FEE_CONFIG_FAILURE_PREFIX: &str = "Failed to fetch project fee configuration: ";

/// Issue raised when the program has no fee configuration for the operation.
pub const NO_FEE_CONFIG: &str = "No fee configuration found";

/// Project fee rates for one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ProjectRates {
    /// Token fee as a fraction of the amount
    token_rate: f64,
    /// Flat SOL fee
    sol_fee: f64,
}

/// Computes protocol and project fees.
#[derive(Clone)]
pub struct FeeCalculator {
    program: Program,
}

impl FeeCalculator {
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Like [`calculate_fees`](Self::calculate_fees), parsing the operation name first.
    pub async fn calculate_fees_str(
        &self,
        operation: &str,
        amount: f64,
    ) -> AnalysisResult<FeeCalculation> {
        let operation: Operation = operation.parse()?;
        Ok(self.calculate_fees(operation, amount).await)
    }

    /// Compute the fees owed for `operation` on `amount` tokens.
    ///
    /// Never fails; problems come back as an invalid, zeroed calculation.
    pub async fn calculate_fees(&self, operation: Operation, amount: f64) -> FeeCalculation {
        debug!(%operation, amount, "Calculating fees");

        // NaN and infinities are treated like non-positive amounts.
        if !amount.is_finite() || amount <= 0.0 {
            return FeeCalculation::rejected(operation, amount, AMOUNT_NOT_POSITIVE.to_string());
        }

        let protocol_token_fee = amount * PROTOCOL_TOKEN_FEE_RATE;
        let protocol_sol_fee = PROTOCOL_SOL_FEE;

        let rates = match self.project_rates(operation).await {
            Ok(Some(rates)) => rates,
            Ok(None) => {
                warn!(%operation, "No fee configuration listed");
                return FeeCalculation::rejected(operation, amount, NO_FEE_CONFIG.to_string());
            }
            Err(e) => {
                warn!(%operation, error = %e, "Fee configuration fetch failed");
                return FeeCalculation::rejected(
                    operation,
                    amount,
                    format!("{}{}", FEE_CONFIG_FAILURE_PREFIX, e),
                );
            }
        };

        let token_fees = FeeBreakdown::new(protocol_token_fee, rates.token_rate * amount);
        let sol_fees = FeeBreakdown::new(protocol_sol_fee, rates.sol_fee);

        info!(
            %operation,
            amount,
            token_total = token_fees.total,
            sol_total = sol_fees.total,
            "Fees calculated"
        );

        FeeCalculation::computed(operation, amount, token_fees, sol_fees)
    }

    /// Rates from the first listed configuration, if any.
    async fn project_rates(&self, operation: Operation) -> ChainResult<Option<ProjectRates>> {
        let rates = match operation {
            Operation::Capture => self
                .program
                .all::<RecipeV1>(Vec::new())
                .await?
                .into_iter()
                .next()
                .map(|r| ProjectRates {
                    token_rate: r.account.fee_amount_capture,
                    sol_fee: r.account.sol_fee_amount_capture,
                }),
            Operation::Release => self
                .program
                .all::<EscrowV1>(Vec::new())
                .await?
                .into_iter()
                .next()
                .map(|e| ProjectRates {
                    token_rate: e.account.fee_amount,
                    sol_fee: e.account.sol_fee_amount,
                }),
        };
        Ok(rates)
    }
}
