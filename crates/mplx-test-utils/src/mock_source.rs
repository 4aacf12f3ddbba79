//! Mock implementation of the `AccountSource` trait for testing.
//!
//! Holds raw accounts in memory, evaluates listing filters locally and
//! can be told to fail every call or only listings.

use async_trait::async_trait;
use mplx_chain::{
    AccountFilter, AccountInfo, AccountLayout, AccountSource, ChainError, ChainResult,
    KeyedAccount,
};
use mplx_types::Address;
use std::sync::{Arc, RwLock};

use crate::fixtures::program_id;

struct MockAccountSourceInner {
    /// Stored accounts, in insertion order.
    accounts: Vec<(Address, AccountInfo)>,
    /// Owner assigned to typed inserts.
    owner: Address,
    /// When set, every call fails with this transport message.
    fail_all: Option<String>,
    /// When set, only listings fail with this transport message.
    fail_listings: Option<String>,
    /// Number of `get_account` calls made.
    fetch_calls: usize,
    /// Filters passed to each `get_program_accounts` call.
    listings: Vec<Vec<AccountFilter>>,
}

/// A mock implementation of the `AccountSource` trait for testing.
///
/// Uses `Arc<RwLock<...>>` internally, so it is cheap to clone and
/// all clones share the same state.
#[derive(Clone)]
pub struct MockAccountSource {
    inner: Arc<RwLock<MockAccountSourceInner>>,
}

impl Default for MockAccountSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAccountSource {
    /// Create an empty source whose typed inserts are owned by the MPL-Hybrid program.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockAccountSourceInner {
                accounts: Vec::new(),
                owner: program_id(),
                fail_all: None,
                fail_listings: None,
                fetch_calls: 0,
                listings: Vec::new(),
            })),
        }
    }

    /// Store a raw account, replacing any account at the same address.
    pub fn insert_account(&self, address: Address, account: AccountInfo) {
        let mut inner = self.inner.write().unwrap();
        if let Some(slot) = inner.accounts.iter_mut().find(|(a, _)| *a == address) {
            slot.1 = account;
        } else {
            inner.accounts.push((address, account));
        }
    }

    /// Encode and store a typed account owned by the program.
    pub fn insert<T: AccountLayout>(&self, address: Address, account: &T) {
        let owner = self.inner.read().unwrap().owner;
        self.insert_account(address, AccountInfo::new(owner, account.encode().unwrap()));
    }

    /// Store an account owned by some other program.
    pub fn insert_foreign<T: AccountLayout>(&self, address: Address, owner: Address, account: &T) {
        self.insert_account(address, AccountInfo::new(owner, account.encode().unwrap()));
    }

    /// Remove the account at `address`.
    pub fn remove(&self, address: &Address) {
        self.inner
            .write()
            .unwrap()
            .accounts
            .retain(|(a, _)| a != address);
    }

    /// Configure the mock to fail all operations.
    pub fn with_failure(self, message: &str) -> Self {
        self.set_fail_all(Some(message));
        self
    }

    /// Set the failure mode at runtime.
    pub fn set_fail_all(&self, message: Option<&str>) {
        self.inner.write().unwrap().fail_all = message.map(str::to_string);
    }

    /// Make only `get_program_accounts` fail.
    pub fn set_fail_listings(&self, message: Option<&str>) {
        self.inner.write().unwrap().fail_listings = message.map(str::to_string);
    }

    // =========================================================================
    // Assertion Helpers
    // =========================================================================

    /// Number of stored accounts.
    pub fn account_count(&self) -> usize {
        self.inner.read().unwrap().accounts.len()
    }

    /// Number of `get_account` calls made so far.
    pub fn fetch_calls(&self) -> usize {
        self.inner.read().unwrap().fetch_calls
    }

    /// Filters passed to every listing so far.
    pub fn listings(&self) -> Vec<Vec<AccountFilter>> {
        self.inner.read().unwrap().listings.clone()
    }
}

#[async_trait]
impl AccountSource for MockAccountSource {
    async fn get_account(&self, address: &Address) -> ChainResult<AccountInfo> {
        let mut inner = self.inner.write().unwrap();
        inner.fetch_calls += 1;

        if let Some(message) = &inner.fail_all {
            return Err(ChainError::transport(message.clone()));
        }

        inner
            .accounts
            .iter()
            .find(|(a, _)| a == address)
            .map(|(_, account)| account.clone())
            .ok_or_else(|| ChainError::account_not_found(address.to_string()))
    }

    async fn get_program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> ChainResult<Vec<KeyedAccount>> {
        let mut inner = self.inner.write().unwrap();
        inner.listings.push(filters.to_vec());

        if let Some(message) = inner.fail_all.as_ref().or(inner.fail_listings.as_ref()) {
            return Err(ChainError::transport(message.clone()));
        }

        Ok(inner
            .accounts
            .iter()
            .filter(|(_, account)| account.owner == *program_id)
            .filter(|(_, account)| filters.iter().all(|f| f.matches(&account.data)))
            .map(|(address, account)| KeyedAccount {
                address: *address,
                account: account.clone(),
            })
            .collect())
    }
}
