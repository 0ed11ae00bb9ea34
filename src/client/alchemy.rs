//! Token data API client (Alchemy token API).
//!
//! Two calls are used: `alchemy_getTokenBalances` lists the ERC-20 balances
//! of an address and `alchemy_getTokenMetadata` describes one contract.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use super::http::HttpClient;
use super::rpc::JsonRpcClient;
use crate::domain::{IndexerError, Network, TokenBalance, TokenMetadata, parse_magnitude};

// ============================================================================
// API Trait
// ============================================================================

/// Source of token balances and metadata.
#[async_trait]
pub trait TokenDataApi: Send + Sync + std::fmt::Debug {
    /// ERC-20 balances held by `address`, in API order.
    async fn get_token_balances(&self, address: &str) -> Result<Vec<TokenBalance>, IndexerError>;

    /// Metadata for the token contract at `contract_address`.
    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, IndexerError>;
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenBalancesResponse {
    #[serde(default)]
    token_balances: Vec<RawTokenBalance>,
    #[serde(default)]
    page_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTokenBalance {
    contract_address: String,
    #[serde(default)]
    token_balance: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

// ============================================================================
// Alchemy Client
// ============================================================================

/// Token API client bound to one network and access key.
#[derive(Debug, Clone)]
pub struct AlchemyClient {
    rpc: JsonRpcClient,
    network: Network,
}

impl AlchemyClient {
    /// Creates a client for `network` authenticated with `api_key`.
    #[must_use]
    pub fn new(http: HttpClient, network: Network, api_key: &str) -> Self {
        Self {
            rpc: JsonRpcClient::new(http, network.alchemy_url(api_key)),
            network,
        }
    }

    /// The network this client queries.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }
}

#[async_trait]
impl TokenDataApi for AlchemyClient {
    async fn get_token_balances(&self, address: &str) -> Result<Vec<TokenBalance>, IndexerError> {
        let result: Value = self
            .rpc
            .call("alchemy_getTokenBalances", json!([address, "erc20"]))
            .await?;
        parse_token_balances(result)
    }

    async fn get_token_metadata(
        &self,
        contract_address: &str,
    ) -> Result<TokenMetadata, IndexerError> {
        let metadata: Option<TokenMetadata> = self
            .rpc
            .call("alchemy_getTokenMetadata", json!([contract_address]))
            .await?;
        Ok(metadata.unwrap_or_default())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Converts an `alchemy_getTokenBalances` result into balance records.
pub(crate) fn parse_token_balances(result: Value) -> Result<Vec<TokenBalance>, IndexerError> {
    let response: TokenBalancesResponse = serde_json::from_value(result)
        .map_err(|e| IndexerError::parse(format!("invalid token balances: {e}")))?;

    if response.page_key.is_some() {
        tracing::debug!(
            "token balance list truncated after {} entries",
            response.token_balances.len()
        );
    }

    response
        .token_balances
        .into_iter()
        .map(|raw| match raw.token_balance {
            Some(balance) => Ok(TokenBalance::new(
                raw.contract_address,
                parse_magnitude(&balance)?,
            )),
            None => Ok(TokenBalance::unreadable(
                raw.contract_address,
                raw.error.map(|e| match e {
                    Value::String(s) => s,
                    other => other.to_string(),
                }),
            )),
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::http::HttpConfig;
    use crate::test_utils::JsonMother;
    use alloy_primitives::U256;

    #[test]
    fn test_parse_token_balances() {
        let balances = parse_token_balances(JsonMother::token_balances()).unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(
            balances[0].contract_address,
            "0x7b79995e5f793a07bc00c21412e50ecae098e7f9"
        );
        assert_eq!(
            balances[0].raw,
            Some(U256::from(1_000_000_000_000_000_000u64))
        );
        assert_eq!(balances[1].raw, Some(U256::from(500_000u64)));
    }

    #[test]
    fn test_parse_token_balances_empty() {
        let balances = parse_token_balances(JsonMother::token_balances_empty()).unwrap();
        assert!(balances.is_empty());
    }

    #[test]
    fn test_parse_token_balances_with_error_entry() {
        let balances = parse_token_balances(JsonMother::token_balances_with_error()).unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].raw, None);
        assert_eq!(balances[0].error.as_deref(), Some("execution reverted"));
    }

    #[test]
    fn test_parse_token_balances_rejects_bad_magnitude() {
        let result = parse_token_balances(json!({
            "address": "0xAAA",
            "tokenBalances": [{"contractAddress": "0x1", "tokenBalance": "0xnope"}]
        }));
        assert!(matches!(result, Err(IndexerError::Parse { .. })));
    }

    #[test]
    fn test_parse_token_balances_rejects_wrong_shape() {
        let result = parse_token_balances(json!(["not", "an", "object"]));
        assert!(matches!(result, Err(IndexerError::Parse { .. })));
    }

    #[test]
    fn test_metadata_result_parses() {
        let metadata: TokenMetadata = serde_json::from_value(JsonMother::usdc_metadata()).unwrap();
        assert_eq!(metadata.symbol.as_deref(), Some("USDC"));
        assert_eq!(metadata.decimals, Some(6));
        assert!(metadata.logo.is_some());
    }

    #[test]
    fn test_client_targets_network_endpoint() {
        let client = AlchemyClient::new(HttpClient::with_config(HttpConfig::default()).unwrap(), Network::EthMainnet, "k");
        assert_eq!(client.network(), Network::EthMainnet);
        assert_eq!(client.rpc.url(), "https://eth-mainnet.g.alchemy.com/v2/k");
    }
}
