//! HTTP client abstraction shared by the wallet and token API clients.

use reqwest::Client;
use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::domain::IndexerError;

// ============================================================================
// Constants
// ============================================================================

/// Idle connections kept per host.
const POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Idle connection lifetime in seconds.
const POOL_IDLE_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper with connection pooling.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::Config` if the TLS backend cannot be initialized.
    pub fn with_config(config: HttpConfig) -> Result<Self, IndexerError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .timeout(config.timeout)
            .build()
            .map_err(|e| IndexerError::config(format!("HTTP client init failed: {e}")))?;

        Ok(Self { inner, config })
    }

    /// Build a JSON POST request with standard headers.
    pub fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .timeout(self.config.timeout)
    }
}
