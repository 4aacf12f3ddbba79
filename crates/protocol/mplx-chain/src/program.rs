//! Typed view over a program's accounts.

use std::sync::Arc;

use mplx_types::Address;
use tracing::debug;

use crate::codec::AccountLayout;
use crate::error::ChainResult;
use crate::filter::AccountFilter;
use crate::traits::AccountSource;

/// A decoded account plus its address.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramAccount<T> {
    pub address: Address,
    pub account: T,
}

/// Handle on one program, backed by an injected [`AccountSource`].
///
/// Cheap to clone; clones share the source.
#[derive(Clone)]
pub struct Program {
    source: Arc<dyn AccountSource>,
    program_id: Address,
}

impl Program {
    pub fn new(source: Arc<dyn AccountSource>, program_id: Address) -> Self {
        Self { source, program_id }
    }

    /// The program's ID.
    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    /// Fetch and decode a single account.
    pub async fn fetch<T: AccountLayout>(&self, address: &Address) -> ChainResult<T> {
        debug!(account = T::NAME, address = %address, "Fetching account");
        let info = self.source.get_account(address).await?;
        Ok(T::decode(&info.data)?)
    }

    /// List and decode every account of type `T` that passes `filters`.
    ///
    /// The type prefix filter is added automatically. Order is whatever the
    /// source returned.
    pub async fn all<T: AccountLayout>(
        &self,
        filters: Vec<AccountFilter>,
    ) -> ChainResult<Vec<ProgramAccount<T>>> {
        let mut all_filters = Vec::with_capacity(filters.len() + 1);
        all_filters.push(AccountFilter::memcmp(0, T::type_prefix()));
        all_filters.extend(filters);

        debug!(account = T::NAME, filters = all_filters.len(), "Listing accounts");

        let keyed = self
            .source
            .get_program_accounts(&self.program_id, &all_filters)
            .await?;

        keyed
            .into_iter()
            .map(|k| -> ChainResult<ProgramAccount<T>> {
                Ok(ProgramAccount {
                    address: k.address,
                    account: T::decode(&k.account.data)?,
                })
            })
            .collect()
    }
}
