//! Shared test utilities and Mother pattern factories.
//!
//! Fixtures for token data plus in-memory implementations of the wallet and
//! token API traits, so state and orchestration tests never touch the network.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::client::TokenDataApi;
use crate::client::wallet::WalletProvider;
use crate::domain::{
    IndexerError, QueryResult, TokenBalance, TokenMetadata, parse_magnitude,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct MetadataMother;

impl MetadataMother {
    #[must_use]
    pub fn token(symbol: &str, decimals: u8) -> TokenMetadata {
        TokenMetadata {
            name: Some(format!("{symbol} Token")),
            symbol: Some(symbol.to_string()),
            decimals: Some(decimals),
            logo: None,
        }
    }

    #[must_use]
    pub fn weth() -> TokenMetadata {
        TokenMetadata {
            name: Some("Wrapped Ether".to_string()),
            symbol: Some("WETH".to_string()),
            decimals: Some(18),
            logo: Some("https://static.alchemyapi.io/images/assets/2396.png".to_string()),
        }
    }

    #[must_use]
    pub fn usdc() -> TokenMetadata {
        TokenMetadata {
            name: Some("USD Coin".to_string()),
            symbol: Some("USDC".to_string()),
            decimals: Some(6),
            logo: Some("https://static.alchemyapi.io/images/assets/3408.png".to_string()),
        }
    }
}

pub struct BalanceMother;

impl BalanceMother {
    #[must_use]
    pub fn with_raw(contract: &str, raw: &str) -> TokenBalance {
        TokenBalance::new(contract, parse_magnitude(raw).expect("valid test magnitude"))
    }
}

pub struct QueryResultMother;

impl QueryResultMother {
    /// The two-token result from the "0xAAA..." scenario: 1.0 WETH and 0.5 USDC.
    #[must_use]
    pub fn weth_and_usdc(address: &str) -> QueryResult {
        QueryResult::new(
            address,
            vec![
                BalanceMother::with_raw(
                    "0x7b79995e5f793a07bc00c21412e50ecae098e7f9",
                    "1000000000000000000",
                ),
                BalanceMother::with_raw("0x1c7d4b196cb0c7b01d743fbc6116a902379c7238", "500000"),
            ],
            vec![MetadataMother::weth(), MetadataMother::usdc()],
        )
        .expect("aligned fixture")
    }

    #[must_use]
    pub fn empty(address: &str) -> QueryResult {
        QueryResult::new(address, Vec::new(), Vec::new()).expect("aligned fixture")
    }

    /// `count` tokens named T0, T1, ... each holding one whole unit.
    #[must_use]
    pub fn many(address: &str, count: usize) -> QueryResult {
        let balances = (0..count)
            .map(|i| BalanceMother::with_raw(&format!("0x{i:040x}"), "1000000000000000000"))
            .collect();
        let metadata = (0..count)
            .map(|i| MetadataMother::token(&format!("T{i}"), 18))
            .collect();
        QueryResult::new(address, balances, metadata).expect("aligned fixture")
    }
}

pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn token_balances() -> Value {
        json!({
            "address": "0xaaa0000000000000000000000000000000000aaa",
            "tokenBalances": [
                {
                    "contractAddress": "0x7b79995e5f793a07bc00c21412e50ecae098e7f9",
                    "tokenBalance": "0x0000000000000000000000000000000000000000000000000de0b6b3a7640000",
                    "error": null
                },
                {
                    "contractAddress": "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238",
                    "tokenBalance": "0x000000000000000000000000000000000000000000000000000000000007a120"
                }
            ],
            "pageKey": "0x1c7d4b196cb0c7b01d743fbc6116a902379c7238"
        })
    }

    #[must_use]
    pub fn token_balances_empty() -> Value {
        json!({
            "address": "0xaaa0000000000000000000000000000000000aaa",
            "tokenBalances": []
        })
    }

    #[must_use]
    pub fn token_balances_with_error() -> Value {
        json!({
            "address": "0xaaa0000000000000000000000000000000000aaa",
            "tokenBalances": [
                {
                    "contractAddress": "0xdead00000000000000000000000000000000beef",
                    "tokenBalance": null,
                    "error": "execution reverted"
                }
            ]
        })
    }

    #[must_use]
    pub fn usdc_metadata() -> Value {
        json!({
            "name": "USD Coin",
            "symbol": "USDC",
            "decimals": 6,
            "logo": "https://static.alchemyapi.io/images/assets/3408.png"
        })
    }
}

// ============================================================================
// Mock Token API
// ============================================================================

/// In-memory token API with optional per-contract latency and failures.
#[derive(Debug)]
pub struct MockTokenApi {
    balances: Vec<TokenBalance>,
    metadata: HashMap<String, TokenMetadata>,
    balances_error: Option<String>,
    metadata_errors: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    metadata_calls: AtomicUsize,
}

impl MockTokenApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: Vec::new(),
            metadata: HashMap::new(),
            balances_error: None,
            metadata_errors: HashMap::new(),
            delays: HashMap::new(),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            metadata_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_token(mut self, contract: &str, raw: &str, metadata: TokenMetadata) -> Self {
        self.balances.push(BalanceMother::with_raw(contract, raw));
        self.metadata.insert(contract.to_string(), metadata);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, contract: &str, millis: u64) -> Self {
        self.delays
            .insert(contract.to_string(), Duration::from_millis(millis));
        self
    }

    #[must_use]
    pub fn failing_balances(mut self, reason: &str) -> Self {
        self.balances_error = Some(reason.to_string());
        self
    }

    #[must_use]
    pub fn failing_metadata(mut self, contract: &str, reason: &str) -> Self {
        self.metadata_errors
            .insert(contract.to_string(), reason.to_string());
        self
    }

    pub fn metadata_calls(&self) -> usize {
        self.metadata_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenDataApi for MockTokenApi {
    async fn get_token_balances(&self, _address: &str) -> Result<Vec<TokenBalance>, IndexerError> {
        match &self.balances_error {
            Some(reason) => Err(IndexerError::rpc(-32000, reason.clone())),
            None => Ok(self.balances.clone()),
        }
    }

    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, IndexerError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(contract_address) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(reason) = self.metadata_errors.get(contract_address) {
            return Err(IndexerError::rpc(-32000, reason.clone()));
        }
        Ok(self
            .metadata
            .get(contract_address)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock Wallet
// ============================================================================

/// In-memory wallet returning fixed accounts or a fixed rejection.
#[derive(Debug, Clone)]
pub struct MockWallet {
    accounts: Vec<String>,
    rejection: Option<String>,
}

impl MockWallet {
    #[must_use]
    pub fn with_accounts(accounts: &[&str]) -> Self {
        Self {
            accounts: accounts.iter().map(|a| (*a).to_string()).collect(),
            rejection: None,
        }
    }

    #[must_use]
    pub fn rejecting(reason: &str) -> Self {
        Self {
            accounts: Vec::new(),
            rejection: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    async fn list_accounts(&self) -> Result<Vec<String>, IndexerError> {
        Ok(self.accounts.clone())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, IndexerError> {
        match &self.rejection {
            Some(reason) => Err(IndexerError::rpc(4001, reason.clone())),
            None => Ok(self.accounts.clone()),
        }
    }
}
