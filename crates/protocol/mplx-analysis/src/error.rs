//! Error types for the analysis services.

use mplx_types::{AddressError, UnknownOperation};
use thiserror::Error;

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Input errors returned by the analysis services.
///
/// Only malformed input reaches the caller as an error. Failures talking
/// to the chain are captured in the returned record's `issues`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// An address argument was malformed.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// The operation name was neither `capture` nor `release`.
    #[error(transparent)]
    InvalidOperation(#[from] UnknownOperation),
}

impl AnalysisError {
    /// Whether the error came from address parsing.
    pub fn is_address_error(&self) -> bool {
        matches!(self, Self::Address(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_error_passes_through() {
        let err: AnalysisError = AddressError::InvalidLength(4).into();
        assert!(err.is_address_error());
        assert_eq!(err.to_string(), "Invalid public key input: expected 32 bytes, got 4");
    }

    #[test]
    fn test_operation_error() {
        let err: AnalysisError = UnknownOperation("burn".to_string()).into();
        assert!(!err.is_address_error());
        assert!(err.to_string().starts_with("Unknown operation 'burn'"));
    }
}
