//! Helper functions for creating test fixtures.
//!
//! Provides deterministic addresses, well-formed recipe/escrow/asset
//! accounts and a pre-wired `Program` over a `MockAccountSource`.

use mplx_chain::Program;
use mplx_types::{
    find_program_address, Address, AssetV1, EscrowV1, Operation, RecipeV1, UpdateAuthority,
    MPL_HYBRID_PROGRAM_ID, RECIPE_SEED,
};
use std::sync::Arc;

use crate::MockAccountSource;

/// The MPL-Hybrid program ID.
pub fn program_id() -> Address {
    MPL_HYBRID_PROGRAM_ID.parse().unwrap()
}

/// Deterministic address with every byte set to `seed`.
pub fn address(seed: u8) -> Address {
    Address::new([seed; 32])
}

/// Recipe PDA for `collection` under the MPL-Hybrid program.
pub fn recipe_address(collection: &Address) -> Address {
    find_program_address(&[RECIPE_SEED, collection.as_ref()], &program_id())
        .unwrap()
        .0
}

/// `Program` handle backed by `source`.
pub fn program_with(source: &MockAccountSource) -> Program {
    Program::new(Arc::new(source.clone()), program_id())
}

/// A recipe that passes every constraint check.
///
/// Capture charges a 1% token fee plus 0.001 SOL; release 1.5% plus 0.0015 SOL.
pub fn recipe(collection: Address) -> RecipeV1 {
    RecipeV1 {
        collection,
        authority: address(200),
        token: address(201),
        fee_location: address(202),
        name: "Hybrid Collection".to_string(),
        uri: "https://example.com/recipe.json".to_string(),
        max: 100,
        min: 0,
        amount: 1000,
        fee_amount_capture: 0.01,
        sol_fee_amount_capture: 0.001,
        fee_amount_release: 0.015,
        sol_fee_amount_release: 0.0015,
        count: 0,
        path: 0,
        bump: 255,
    }
}

/// An escrow that passes every constraint check, holding `asset`.
pub fn escrow(collection: Address, asset: Address) -> EscrowV1 {
    EscrowV1 {
        asset,
        collection,
        authority: address(200),
        token: address(201),
        fee_location: address(202),
        name: "Hybrid Escrow".to_string(),
        uri: "https://example.com/escrow.json".to_string(),
        max: 100,
        min: 0,
        amount: 1000,
        fee_amount: 0.015,
        sol_fee_amount: 0.0015,
        count: 3,
        path: 0,
        last_operation: Some(Operation::Capture),
        timestamp: 1_700_000_000,
        bump: 254,
    }
}

/// An MPL-Core asset owned by `owner`.
pub fn asset(owner: Address) -> AssetV1 {
    AssetV1 {
        owner,
        update_authority: UpdateAuthority::Address(address(200)),
        name: "Hybrid #1".to_string(),
        uri: "https://example.com/1.json".to_string(),
    }
}
