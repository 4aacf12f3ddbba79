//! Account source trait definition.

use async_trait::async_trait;
use mplx_types::Address;

use crate::error::ChainResult;
use crate::filter::AccountFilter;

/// Raw account as stored on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Program that owns the account
    pub owner: Address,
    /// Balance in lamports
    pub lamports: u64,
    /// Account data
    pub data: Vec<u8>,
}

impl AccountInfo {
    /// Account with no lamports, owned by `owner`.
    pub fn new(owner: Address, data: Vec<u8>) -> Self {
        Self {
            owner,
            lamports: 0,
            data,
        }
    }
}

/// An account together with its address, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedAccount {
    pub address: Address,
    pub account: AccountInfo,
}

/// Read-only access to chain accounts.
///
/// This trait abstracts the RPC layer, allowing for:
/// - A JSON-RPC implementation talking to a cluster
/// - An in-memory implementation for tests
///
/// Implementations never retry; each failure is reported once.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Fetch a single account.
    ///
    /// Fails with `AccountNotFound` when nothing lives at `address`.
    async fn get_account(&self, address: &Address) -> ChainResult<AccountInfo>;

    /// List all accounts owned by `program_id` that pass every filter.
    ///
    /// Results come back in source order; callers must not assume sorting.
    async fn get_program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> ChainResult<Vec<KeyedAccount>>;
}
