//! Error types for the account source layer.

use mplx_types::AddressError;
use thiserror::Error;

/// Result type alias for account source operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors raised while decoding raw account bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Data shorter than the account type prefix.
    #[error("account data too short: needed {needed} bytes, {remaining} remaining")]
    TooShort {
        /// Bytes required by the prefix
        needed: usize,
        /// Bytes in the buffer
        remaining: usize,
    },

    /// Leading discriminator did not match the expected account type.
    #[error("account discriminator mismatch: not a {0} account")]
    DiscriminatorMismatch(&'static str),

    /// Leading key byte did not match the expected account type.
    #[error("account key mismatch: expected {expected}, got {actual}")]
    KeyMismatch {
        /// Expected key
        expected: u8,
        /// Key found in the data
        actual: u8,
    },

    /// The Borsh body did not match the layout.
    #[error("invalid {account} data: {message}")]
    Borsh {
        /// Account type being decoded
        account: &'static str,
        /// Message from the Borsh reader
        message: String,
    },
}

/// Errors that can occur when reading accounts.
#[derive(Debug, Error)]
pub enum ChainError {
    /// No account exists at the address.
    #[error("Account does not exist or has no data {0}")]
    AccountNotFound(String),

    /// The RPC node answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code
        code: i64,
        /// Error message from the node
        message: String,
    },

    /// HTTP-level failure talking to the node.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The node answered with something we could not interpret.
    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),

    /// Account bytes did not match the expected layout.
    #[error("failed to decode account: {0}")]
    Decode(#[from] DecodeError),

    /// An address in a response or config was malformed.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ChainError {
    /// Create a new AccountNotFound error.
    pub fn account_not_found(address: impl Into<String>) -> Self {
        Self::AccountNotFound(address.into())
    }

    /// Create a new Transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new Timeout error.
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new InvalidResponse error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a new Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the account simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}

impl From<reqwest::Error> for ChainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_decode() {
            Self::InvalidResponse(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ChainError::account_not_found("abc");
        assert_eq!(err.to_string(), "Account does not exist or has no data abc");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_rpc_display() {
        let err = ChainError::Rpc {
            code: -32602,
            message: "Invalid param".to_string(),
        };
        assert_eq!(err.to_string(), "RPC error -32602: Invalid param");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_decode_wraps() {
        let err: ChainError = DecodeError::DiscriminatorMismatch("EscrowV1").into();
        assert_eq!(
            err.to_string(),
            "failed to decode account: account discriminator mismatch: not a EscrowV1 account"
        );
    }
}
