//! Core data types for the MPL-Hybrid MCP servers.
//!
//! This crate holds everything the other crates agree on:
//!
//! - **Addresses**: 32-byte base58 keys and program-derived addresses
//! - **Accounts**: recipe, escrow and asset layouts as plain structs
//! - **Records**: the analysis results handed to the MCP layer
//! - **Constants**: program ID, seeds, offsets and protocol fee rates
//!
//! # Example
//!
//! ```
//! use mplx_types::{find_program_address, Address, RECIPE_SEED};
//!
//! let program: Address = "11111111111111111111111111111111".parse().unwrap();
//! let collection = Address::new([1u8; 32]);
//! let (recipe, _bump) = find_program_address(&[RECIPE_SEED, collection.as_ref()], &program).unwrap();
//! println!("recipe lives at {}", recipe);
//! ```

mod accounts;
mod address;
pub mod constants;
mod error;
mod operation;
mod records;

pub use accounts::{AssetV1, EscrowV1, RecipeV1, UpdateAuthority};
pub use address::{create_program_address, find_program_address, Address, MAX_SEEDS, MAX_SEED_LEN};
pub use constants::*;
pub use error::{AddressError, UnknownOperation};
pub use operation::Operation;
pub use records::{
    ConversionStatus, EscrowValidation, FeeBreakdown, FeeCalculation, RecipeAnalysis,
};
