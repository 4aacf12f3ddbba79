//! Solana JSON-RPC account source.
//!
//! Talks to a cluster node over HTTP using two read-only methods:
//! - `getAccountInfo` for single accounts
//! - `getProgramAccounts` for filtered listings
//!
//! Account data is requested base64-encoded.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use mplx_types::Address;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::{ChainConfig, Commitment};
use crate::error::{ChainError, ChainResult};
use crate::filter::AccountFilter;
use crate::traits::{AccountInfo, AccountSource, KeyedAccount};

/// [`AccountSource`] backed by a cluster's JSON-RPC endpoint.
pub struct RpcAccountSource {
    client: Client,
    endpoint: String,
    commitment: Commitment,
    next_id: AtomicU64,
}

impl RpcAccountSource {
    /// Create a source from configuration.
    pub fn new(config: &ChainConfig) -> ChainResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChainError::transport(format!("failed to create HTTP client: {}", e)))?;

        debug!(endpoint = %config.endpoint(), cluster = %config.cluster, "Created RPC account source");

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            commitment: config.commitment,
            next_id: AtomicU64::new(1),
        })
    }

    /// Endpoint this source talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call<T: for<'de> Deserialize<'de>>(&self, method: &str, params: Value) -> ChainResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "Sending RPC request");

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChainError::transport(format!(
                "{} returned HTTP {}: {}",
                method, status, body
            )));
        }

        let envelope: RpcEnvelope<T> = response.json().await.map_err(|e| {
            ChainError::invalid_response(format!("failed to parse {} response: {}", method, e))
        })?;

        if let Some(error) = envelope.error {
            warn!(method, code = error.code, message = %error.message, "RPC call failed");
            return Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        envelope
            .result
            .ok_or_else(|| ChainError::invalid_response(format!("{} response had no result", method)))
    }
}

#[async_trait]
impl AccountSource for RpcAccountSource {
    async fn get_account(&self, address: &Address) -> ChainResult<AccountInfo> {
        let params = json!([
            address.to_base58(),
            { "encoding": "base64", "commitment": self.commitment.as_str() }
        ]);

        let result: RpcContext<Option<RpcAccount>> = self.call("getAccountInfo", params).await?;

        match result.value {
            Some(account) => account.into_info(),
            None => Err(ChainError::account_not_found(address.to_base58())),
        }
    }

    async fn get_program_accounts(
        &self,
        program_id: &Address,
        filters: &[AccountFilter],
    ) -> ChainResult<Vec<KeyedAccount>> {
        let filters: Vec<Value> = filters.iter().map(AccountFilter::to_rpc_json).collect();
        let params = json!([
            program_id.to_base58(),
            {
                "encoding": "base64",
                "commitment": self.commitment.as_str(),
                "filters": filters,
            }
        ]);

        let result: Vec<RpcKeyedAccount> = self.call("getProgramAccounts", params).await?;
        debug!(count = result.len(), "Program accounts returned");

        result
            .into_iter()
            .map(|keyed| -> ChainResult<KeyedAccount> {
                Ok(KeyedAccount {
                    address: keyed.pubkey.parse()?,
                    account: keyed.account.into_info()?,
                })
            })
            .collect()
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcContext<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct RpcAccount {
    owner: String,
    lamports: u64,
    /// `[payload, encoding]`
    data: (String, String),
}

impl RpcAccount {
    fn into_info(self) -> ChainResult<AccountInfo> {
        let (payload, encoding) = self.data;
        if encoding != "base64" {
            return Err(ChainError::invalid_response(format!(
                "unexpected account encoding: {}",
                encoding
            )));
        }

        let data = BASE64
            .decode(payload.as_bytes())
            .map_err(|e| ChainError::invalid_response(format!("invalid base64 account data: {}", e)))?;

        Ok(AccountInfo {
            owner: self.owner.parse()?,
            lamports: self.lamports,
            data,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RpcKeyedAccount {
    pubkey: String,
    account: RpcAccount,
}
