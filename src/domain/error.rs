//! Error types for wallet and token data operations.
//!
//! Every failure the application can hit while talking to the wallet or the
//! token data API is represented here. The UI never branches on the variant:
//! it shows the `Display` text as the single visible error message.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for wallet and token API operations.
#[derive(Debug, Error)]
pub enum IndexerError {
    /// No wallet provider is configured or reachable.
    #[error("No wallet installed!")]
    WalletUnavailable,

    /// A JSON-RPC error object returned by the wallet or the data API.
    ///
    /// Only the provider's reason is displayed (e.g. "User rejected the request.").
    #[error("{message}")]
    Rpc {
        /// JSON-RPC error code (4001 for user rejection under EIP-1193).
        code: i64,
        /// Provider-defined reason.
        message: String,
    },

    /// Transport errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status without a JSON-RPC body.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Missing or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background fetch task panicked or was cancelled.
    #[error("Task failed: {0}")]
    Task(String),
}

impl IndexerError {
    /// Create a new JSON-RPC error.
    #[must_use]
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if the wallet refused the request on behalf of the user.
    #[must_use]
    pub const fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code: 4001, .. })
    }

    /// Convert to a `color_eyre::Report` for API compatibility.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
