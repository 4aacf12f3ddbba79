//! On-chain account models.
//!
//! These mirror the MPL-Hybrid program's account layouts (recipes and
//! escrows) and the subset of the MPL-Core asset layout the servers read.
//! Field order is the on-chain Borsh order. Discriminator and key checks
//! live in `mplx-chain`.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::{Address, Operation};

/// Per-collection swap configuration, stored at the `["recipe", collection]` PDA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeV1 {
    pub collection: Address,
    pub authority: Address,
    pub token: Address,
    pub fee_location: Address,
    pub name: String,
    pub uri: String,
    pub max: u64,
    pub min: u64,
    /// Tokens exchanged per swap
    pub amount: u64,
    /// Project token fee rate applied on capture
    pub fee_amount_capture: f64,
    /// Project SOL fee charged on capture
    pub sol_fee_amount_capture: f64,
    /// Project token fee rate applied on release
    pub fee_amount_release: f64,
    /// Project SOL fee charged on release
    pub sol_fee_amount_release: f64,
    pub count: u64,
    pub path: u16,
    pub bump: u8,
}

/// Escrow configuration and lock state.
///
/// `asset` is the first field after the discriminator so escrows can be
/// found by asset with a single memcmp filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowV1 {
    /// Asset currently locked in the escrow
    pub asset: Address,
    pub collection: Address,
    pub authority: Address,
    pub token: Address,
    pub fee_location: Address,
    pub name: String,
    pub uri: String,
    pub max: u64,
    pub min: u64,
    pub amount: u64,
    pub fee_amount: f64,
    pub sol_fee_amount: f64,
    pub count: u64,
    pub path: u16,
    /// Last swap recorded against this escrow
    pub last_operation: Option<Operation>,
    /// Unix timestamp of the last swap
    pub timestamp: i64,
    pub bump: u8,
}

/// Update authority of an MPL-Core asset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[serde(tag = "type", content = "address", rename_all = "lowercase")]
pub enum UpdateAuthority {
    None,
    Address(Address),
    Collection(Address),
}

/// MPL-Core asset (only the leading fields).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetV1 {
    pub owner: Address,
    pub update_authority: UpdateAuthority,
    pub name: String,
    pub uri: String,
}
