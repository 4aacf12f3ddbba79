//! Error types for mplx-types

use thiserror::Error;

/// Errors raised while parsing or deriving addresses.
///
/// These are input errors: callers get them back as `Err` and they are
/// never folded into a result record's issue list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input was not valid base58
    #[error("Invalid public key input: invalid base58 ({0})")]
    InvalidBase58(String),

    /// The decoded key had the wrong length
    #[error("Invalid public key input: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    /// A single seed exceeded the per-seed limit
    #[error("Seed too long: {len} bytes exceeds maximum of {max}")]
    SeedTooLong { len: usize, max: usize },

    /// Too many seeds were supplied
    #[error("Too many seeds: {count} exceeds maximum of {max}")]
    TooManySeeds { count: usize, max: usize },

    /// The derived address landed on the ed25519 curve
    #[error("Derived address is on the ed25519 curve")]
    OnCurve,

    /// No bump seed produced an off-curve address
    #[error("Unable to find a viable program address bump seed")]
    NoViableBump,
}

/// Error for strings that are not `capture` or `release`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown operation '{0}': expected 'capture' or 'release'")]
pub struct UnknownOperation(pub String);
