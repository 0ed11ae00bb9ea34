//! Token balance and metadata types.
//!
//! Balances and metadata arrive from two different API calls and are joined
//! by array position: `metadata[i]` always describes `balances[i]`.
//! [`QueryResult`] is the only way to hold both, and it refuses lists of
//! different lengths.

use alloy_primitives::U256;
use chrono::{DateTime, Local};
use serde::Deserialize;

use super::IndexerError;
use super::units::{DEFAULT_DECIMALS, format_units};

// ============================================================================
// Balance Records
// ============================================================================

/// A raw ERC-20 balance for one contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    /// Token contract address.
    pub contract_address: String,
    /// Raw balance magnitude, `None` if the API could not read it.
    pub raw: Option<U256>,
    /// Per-token error reported by the API alongside a missing balance.
    pub error: Option<String>,
}

impl TokenBalance {
    /// Creates a balance record with a known magnitude.
    #[must_use]
    pub fn new(contract_address: impl Into<String>, raw: U256) -> Self {
        Self {
            contract_address: contract_address.into(),
            raw: Some(raw),
            error: None,
        }
    }

    /// Creates a balance record the API failed to read.
    #[must_use]
    pub fn unreadable(contract_address: impl Into<String>, error: Option<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            raw: None,
            error,
        }
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Token metadata as reported by the token API. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenMetadata {
    /// Token name (e.g. "USD Coin").
    #[serde(default)]
    pub name: Option<String>,
    /// Ticker symbol (e.g. "USDC").
    #[serde(default)]
    pub symbol: Option<String>,
    /// Number of decimals the raw balance is scaled by.
    #[serde(default)]
    pub decimals: Option<u8>,
    /// Icon URL.
    #[serde(default)]
    pub logo: Option<String>,
}

impl TokenMetadata {
    /// Symbol for display, `"???"` when the token has none.
    #[must_use]
    pub fn display_symbol(&self) -> &str {
        self.symbol
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("???")
    }

    /// Decimal count, falling back to [`DEFAULT_DECIMALS`].
    #[must_use]
    pub fn decimals_or_default(&self) -> u8 {
        self.decimals.unwrap_or(DEFAULT_DECIMALS)
    }
}

// ============================================================================
// Joined View
// ============================================================================

/// One balance paired with its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHolding<'a> {
    /// The raw balance.
    pub balance: &'a TokenBalance,
    /// Metadata for the same contract.
    pub metadata: &'a TokenMetadata,
}

impl TokenHolding<'_> {
    /// Human-scaled balance, e.g. `"1.5"`.
    ///
    /// Unreadable balances render as `"n/a"`, followed by the API's reason
    /// when it gave one.
    #[must_use]
    pub fn display_balance(&self) -> String {
        if let Some(raw) = self.balance.raw {
            return format_units(raw, self.metadata.decimals_or_default());
        }
        match self.balance.error.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => format!("n/a ({reason})"),
            _ => "n/a".to_string(),
        }
    }

    /// Icon reference, or `"no logo"`.
    #[must_use]
    pub fn display_logo(&self) -> &str {
        self.metadata
            .logo
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("no logo")
    }
}

// ============================================================================
// Query Result
// ============================================================================

/// Outcome of one completed balance query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Address that was queried.
    pub address: String,
    balances: Vec<TokenBalance>,
    metadata: Vec<TokenMetadata>,
    /// When the last metadata response arrived.
    pub completed_at: DateTime<Local>,
}

impl QueryResult {
    /// Joins balances and metadata fetched in the same order.
    ///
    /// # Errors
    ///
    /// Returns `IndexerError::Parse` if the lists differ in length.
    pub fn new(
        address: impl Into<String>,
        balances: Vec<TokenBalance>,
        metadata: Vec<TokenMetadata>,
    ) -> Result<Self, IndexerError> {
        if balances.len() != metadata.len() {
            return Err(IndexerError::parse(format!(
                "metadata count {} does not match balance count {}",
                metadata.len(),
                balances.len()
            )));
        }

        Ok(Self {
            address: address.into(),
            balances,
            metadata,
            completed_at: Local::now(),
        })
    }

    /// Raw balances in API order.
    #[cfg(test)]
    #[must_use]
    pub fn balances(&self) -> &[TokenBalance] {
        &self.balances
    }

    /// Metadata in the same order as [`Self::balances`].
    #[cfg(test)]
    #[must_use]
    pub fn metadata(&self) -> &[TokenMetadata] {
        &self.metadata
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns `true` if the address holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Returns the holding at `index`.
    #[must_use]
    pub fn holding(&self, index: usize) -> Option<TokenHolding<'_>> {
        Some(TokenHolding {
            balance: self.balances.get(index)?,
            metadata: self.metadata.get(index)?,
        })
    }

    /// Iterates balances paired with their metadata.
    #[cfg(test)]
    pub fn holdings(&self) -> impl Iterator<Item = TokenHolding<'_>> {
        self.balances
            .iter()
            .zip(&self.metadata)
            .map(|(balance, metadata)| TokenHolding { balance, metadata })
    }
}

// ============================================================================
// Tests
// ============================================================================
