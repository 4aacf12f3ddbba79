//! Protocol constants for the MPL-Hybrid program and its fee schedule.

// =============================================================================
// Program
// =============================================================================

/// MPL-Hybrid program ID (base58)
pub const MPL_HYBRID_PROGRAM_ID: &str = "MPL4o4wMzndgh8T1NVDxELQCj5UQfYTYEkabX3wNKtb";

/// Seed prefix for recipe PDAs: `["recipe", collection]`
pub const RECIPE_SEED: &[u8] = b"recipe";

/// Length of the Anchor account discriminator
pub const DISCRIMINATOR_LEN: usize = 8;

/// Offset of the locked asset inside an escrow account (right after the discriminator)
pub const ESCROW_ASSET_OFFSET: usize = DISCRIMINATOR_LEN;

/// MPL-Core account key tag for assets
pub const ASSET_V1_KEY: u8 = 1;

// =============================================================================
// Protocol Fees
// =============================================================================

/// Protocol token fee rate: 0.1% of the transferred amount
pub const PROTOCOL_TOKEN_FEE_RATE: f64 = 0.001;

/// Flat protocol SOL fee per operation
pub const PROTOCOL_SOL_FEE: f64 = 0.00001;
