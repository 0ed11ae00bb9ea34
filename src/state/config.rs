//! Application configuration with persistence.
//!
//! [`AppConfig`] is stored as JSON in the platform config directory (see
//! [`AppPaths`]). A missing or unreadable file yields the defaults. Command
//! line flags are layered on top with [`AppConfig::with_overrides`]; the API
//! key only ever comes from the command line or the environment and is never
//! part of this file.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use super::StartupOptions;
use super::platform::AppPaths;
use crate::constants::{DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::domain::Network;

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Network whose token API and explorer are used.
    pub network: Network,
    /// JSON-RPC endpoint of the wallet; `None` means no wallet is installed.
    pub wallet_url: Option<String>,
    /// Maximum metadata requests in flight per query.
    pub concurrency: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            wallet_url: None,
            concurrency: DEFAULT_CONCURRENCY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from disk, falling back to defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// Returns `Ok(None)` when no config file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its JSON cannot be parsed.
    pub fn try_load() -> Result<Option<Self>> {
        let path = AppPaths::new().config_file()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(Self::from_json(&content)?))
    }

    /// Parses a config document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `content` is not a valid config document.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Saves the configuration to disk and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot be written.
    pub fn save(&self) -> Result<std::path::PathBuf> {
        let path = AppPaths::new().config_file()?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }

    /// Applies command line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, options: &StartupOptions) -> Self {
        if let Some(network) = options.network {
            self.network = network;
        }
        if let Some(url) = &options.wallet_url {
            self.wallet_url = Some(url.clone());
        }
        if let Some(concurrency) = options.concurrency {
            self.concurrency = concurrency;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.network, Network::EthSepolia);
        assert!(config.wallet_url.is_none());
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = AppConfig::from_json(r#"{ "network": "eth-mainnet" }"#).unwrap();
        assert_eq!(config.network, Network::EthMainnet);
        assert_eq!(config.concurrency, DEFAULT_CONCURRENCY);
        assert!(config.wallet_url.is_none());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = AppConfig {
            network: Network::BaseMainnet,
            wallet_url: Some("http://127.0.0.1:1248".to_string()),
            concurrency: 3,
            timeout_secs: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("api_key"));
        assert_eq!(AppConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let file = AppConfig {
            network: Network::EthMainnet,
            wallet_url: Some("http://file".to_string()),
            concurrency: 2,
            timeout_secs: 30,
        };
        let options = StartupOptions {
            network: Some(Network::EthSepolia),
            concurrency: Some(16),
            ..StartupOptions::default()
        };

        let merged = file.with_overrides(&options);

        assert_eq!(merged.network, Network::EthSepolia);
        assert_eq!(merged.wallet_url.as_deref(), Some("http://file"));
        assert_eq!(merged.concurrency, 16);
    }
}
