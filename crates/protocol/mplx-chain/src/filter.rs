//! Account listing filters.
//!
//! Mirrors the `getProgramAccounts` filter objects: a byte-offset equality
//! match (`memcmp`) or an exact data length (`dataSize`).

use mplx_types::Address;
use serde_json::{json, Value};

/// A server-side filter over raw account data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// `data[offset..offset + bytes.len()] == bytes`
    Memcmp { offset: usize, bytes: Vec<u8> },
    /// `data.len() == size`
    DataSize(u64),
}

impl AccountFilter {
    /// Match `bytes` at `offset`.
    pub fn memcmp(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Memcmp {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Match an address at `offset`.
    pub fn memcmp_address(offset: usize, address: &Address) -> Self {
        Self::memcmp(offset, address.as_bytes().to_vec())
    }

    /// Evaluate the filter locally.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            Self::Memcmp { offset, bytes } => data
                .get(*offset..offset + bytes.len())
                .is_some_and(|window| window == bytes.as_slice()),
            Self::DataSize(size) => data.len() as u64 == *size,
        }
    }

    /// JSON-RPC representation (memcmp bytes are base58).
    pub fn to_rpc_json(&self) -> Value {
        match self {
            Self::Memcmp { offset, bytes } => json!({
                "memcmp": {
                    "offset": offset,
                    "bytes": bs58::encode(bytes).into_string(),
                }
            }),
            Self::DataSize(size) => json!({ "dataSize": size }),
        }
    }
}
