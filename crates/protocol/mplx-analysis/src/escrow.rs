//! Escrow validation and conversion status.
//!
//! Escrows are addressed directly; there is no derivation step. Whether an
//! asset is currently converted is answered by looking for an escrow that
//! holds it, using a memcmp filter on the escrow's asset field.

use mplx_chain::{AccountFilter, ChainResult, Program};
use mplx_types::{
    Address, AssetV1, ConversionStatus, EscrowV1, EscrowValidation, ESCROW_ASSET_OFFSET,
};
use tracing::{debug, info, warn};

use crate::checks::check_escrow;
use crate::error::AnalysisResult;

/// Prefix for issues raised when the escrow cannot be read.
pub const ESCROW_FAILURE_PREFIX: &str = "Failed to validate escrow: ";

/// Prefix for issues raised when lock status cannot be determined.
pub const STATUS_FAILURE_PREFIX: &str = "Failed to check conversion status: ";

/// Validates escrows and reports asset lock status.
#[derive(Clone)]
pub struct EscrowValidator {
    program: Program,
}

impl EscrowValidator {
    pub fn new(program: Program) -> Self {
        Self { program }
    }

    /// Fetch the escrow at `escrow` and run the escrow constraint checks.
    ///
    /// Both addresses must parse. `collection` is echoed back but not
    /// compared against the escrow's stored collection.
    pub async fn validate_escrow(
        &self,
        collection: &str,
        escrow: &str,
    ) -> AnalysisResult<EscrowValidation> {
        let _: Address = collection.parse()?;
        let escrow_address: Address = escrow.parse()?;
        debug!(collection, escrow, "Validating escrow");

        let account = match self.program.fetch::<EscrowV1>(&escrow_address).await {
            Ok(account) => account,
            Err(e) => {
                warn!(escrow, error = %e, "Escrow fetch failed");
                return Ok(EscrowValidation::failed(
                    collection,
                    escrow,
                    format!("{}{}", ESCROW_FAILURE_PREFIX, e),
                ));
            }
        };

        let issues = check_escrow(&account);
        info!(escrow, issues = issues.len(), "Escrow validated");

        Ok(EscrowValidation::from_escrow(collection, escrow, &account, issues))
    }

    /// Report whether `asset` is locked in an escrow.
    ///
    /// The asset fetch and the escrow listing are separate reads; if several
    /// escrows match, the first one returned wins.
    pub async fn check_conversion_status(&self, asset: &str) -> AnalysisResult<ConversionStatus> {
        let asset_address: Address = asset.parse()?;
        debug!(asset, "Checking conversion status");

        match self.lookup(&asset_address).await {
            Ok((owner, None)) => {
                info!(asset, owner = %owner, "Asset is not locked");
                Ok(ConversionStatus::unlocked(asset, &owner))
            }
            Ok((owner, Some((escrow_address, escrow)))) => {
                info!(asset, escrow = %escrow_address, "Asset is locked");
                Ok(ConversionStatus::locked(asset, &owner, &escrow_address, &escrow))
            }
            Err(e) => {
                warn!(asset, error = %e, "Conversion status lookup failed");
                Ok(ConversionStatus::failed(
                    asset,
                    format!("{}{}", STATUS_FAILURE_PREFIX, e),
                ))
            }
        }
    }

    async fn lookup(
        &self,
        asset: &Address,
    ) -> ChainResult<(Address, Option<(Address, EscrowV1)>)> {
        let owner = self.program.fetch::<AssetV1>(asset).await?.owner;

        let escrows = self
            .program
            .all::<EscrowV1>(vec![AccountFilter::memcmp_address(ESCROW_ASSET_OFFSET, asset)])
            .await?;
        debug!(matches = escrows.len(), "Escrow listing returned");

        Ok((
            owner,
            escrows.into_iter().next().map(|e| (e.address, e.account)),
        ))
    }
}
