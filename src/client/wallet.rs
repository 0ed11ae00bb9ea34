//! Wallet provider boundary.
//!
//! A wallet exposes two EIP-1193 requests: `eth_accounts` lists the accounts
//! the user already authorized (no prompt) and `eth_requestAccounts` asks the
//! user to authorize. [`JsonRpcWallet`] talks to any wallet that serves those
//! methods over HTTP; [`WalletConnector`] adds the "no wallet installed" case.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::http::HttpClient;
use super::rpc::JsonRpcClient;
use crate::domain::IndexerError;

// ============================================================================
// Provider Trait
// ============================================================================

/// A source of wallet accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync + std::fmt::Debug {
    /// Accounts already authorized for this application, without prompting.
    async fn list_accounts(&self) -> Result<Vec<String>, IndexerError>;

    /// Asks the user to authorize accounts. May prompt and may be rejected.
    async fn request_accounts(&self) -> Result<Vec<String>, IndexerError>;
}

// ============================================================================
// JSON-RPC Wallet
// ============================================================================

/// A wallet reachable as a JSON-RPC endpoint (e.g. a desktop wallet's local port).
#[derive(Debug, Clone)]
pub struct JsonRpcWallet {
    rpc: JsonRpcClient,
}

impl JsonRpcWallet {
    /// Creates a wallet client for `url`.
    #[must_use]
    pub fn new(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            rpc: JsonRpcClient::new(http, url),
        }
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn list_accounts(&self) -> Result<Vec<String>, IndexerError> {
        let accounts: Option<Vec<String>> =
            self.rpc.call("eth_accounts", Vec::<Value>::new()).await?;
        Ok(accounts.unwrap_or_default())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, IndexerError> {
        tracing::info!("requesting wallet accounts from {}", self.rpc.url());
        let accounts: Option<Vec<String>> = self
            .rpc
            .call("eth_requestAccounts", Vec::<Value>::new())
            .await?;
        Ok(accounts.unwrap_or_default())
    }
}

// ============================================================================
// Connector
// ============================================================================

/// Wraps an optional wallet provider; `None` means no wallet is installed.
#[derive(Debug, Clone, Default)]
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletConnector {
    /// Creates a connector around `provider`.
    #[must_use]
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    /// Creates a connector for the wallet endpoint at `url`, if any.
    #[must_use]
    pub fn from_url(http: &HttpClient, url: Option<&str>) -> Self {
        let provider = url
            .filter(|u| !u.trim().is_empty())
            .map(|u| Arc::new(JsonRpcWallet::new(http.clone(), u.trim())) as Arc<dyn WalletProvider>);
        Self { provider }
    }

    /// Returns `true` if a wallet provider is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    /// First already-authorized account, without prompting.
    ///
    /// A missing provider or an empty account list yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Propagates provider errors.
    pub async fn authorized_account(&self) -> Result<Option<String>, IndexerError> {
        let Some(provider) = &self.provider else {
            return Ok(None);
        };
        Ok(provider.list_accounts().await?.into_iter().next())
    }

    /// Prompts for accounts and returns the first one.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::WalletUnavailable` if no provider is present,
    /// the provider's error if it fails or the user rejects, and
    /// `IndexerError::Rpc` if the wallet authorizes no account.
    pub async fn connect(&self) -> Result<String, IndexerError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(IndexerError::WalletUnavailable)?;

        provider
            .request_accounts()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| IndexerError::rpc(4100, "The wallet returned no accounts."))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::http::HttpConfig;
    use crate::test_utils::MockWallet;

    #[tokio::test]
    async fn test_connect_without_provider() {
        let connector = WalletConnector::default();
        assert!(!connector.is_available());

        let err = connector.connect().await.unwrap_err();
        assert!(matches!(err, IndexerError::WalletUnavailable));
        assert_eq!(err.to_string(), "No wallet installed!");
    }

    #[tokio::test]
    async fn test_authorized_account_without_provider_is_silent() {
        let connector = WalletConnector::default();
        assert_eq!(connector.authorized_account().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_connect_returns_first_account() {
        let wallet = MockWallet::with_accounts(&["0xfirst", "0xsecond"]);
        let connector = WalletConnector::new(Some(Arc::new(wallet)));

        assert_eq!(connector.connect().await.unwrap(), "0xfirst");
        assert_eq!(
            connector.authorized_account().await.unwrap().as_deref(),
            Some("0xfirst")
        );
    }

    #[tokio::test]
    async fn test_connect_rejected() {
        let wallet = MockWallet::rejecting("User rejected the request.");
        let connector = WalletConnector::new(Some(Arc::new(wallet)));

        let err = connector.connect().await.unwrap_err();
        assert_eq!(err.to_string(), "User rejected the request.");
    }

    #[tokio::test]
    async fn test_connect_with_no_accounts() {
        let wallet = MockWallet::with_accounts(&[]);
        let connector = WalletConnector::new(Some(Arc::new(wallet)));

        assert!(connector.connect().await.is_err());
        assert_eq!(connector.authorized_account().await.unwrap(), None);
    }

    #[test]
    fn test_from_url_blank_means_absent() {
        let http = HttpClient::with_config(HttpConfig::default()).unwrap();
        assert!(!WalletConnector::from_url(&http, None).is_available());
        assert!(!WalletConnector::from_url(&http, Some("  ")).is_available());
        assert!(WalletConnector::from_url(&http, Some("http://127.0.0.1:1248")).is_available());
    }
}
