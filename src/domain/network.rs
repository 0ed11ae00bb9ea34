//! Network configuration for EVM networks served by the token data API.
//!
//! Each network knows its Alchemy subdomain and the block explorer used for
//! "open in browser" links.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// ============================================================================
// Network Configuration
// ============================================================================

/// EVM networks with token API support.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Network {
    /// Ethereum mainnet.
    EthMainnet,
    /// Ethereum Sepolia testnet.
    #[default]
    EthSepolia,
    /// Ethereum Holesky testnet.
    EthHolesky,
    /// Polygon PoS mainnet.
    PolygonMainnet,
    /// Arbitrum One.
    ArbMainnet,
    /// OP mainnet.
    OptMainnet,
    /// Base mainnet.
    BaseMainnet,
}

impl Network {
    /// Every supported network, in display order.
    #[cfg(test)]
    pub const ALL: [Self; 7] = [
        Self::EthMainnet,
        Self::EthSepolia,
        Self::EthHolesky,
        Self::PolygonMainnet,
        Self::ArbMainnet,
        Self::OptMainnet,
        Self::BaseMainnet,
    ];

    /// Returns the human-readable name of the network.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::EthMainnet => "Ethereum",
            Self::EthSepolia => "Sepolia",
            Self::EthHolesky => "Holesky",
            Self::PolygonMainnet => "Polygon",
            Self::ArbMainnet => "Arbitrum",
            Self::OptMainnet => "Optimism",
            Self::BaseMainnet => "Base",
        }
    }

    /// Returns the Alchemy subdomain identifying this network.
    #[must_use]
    pub const fn alchemy_subdomain(&self) -> &str {
        match self {
            Self::EthMainnet => "eth-mainnet",
            Self::EthSepolia => "eth-sepolia",
            Self::EthHolesky => "eth-holesky",
            Self::PolygonMainnet => "polygon-mainnet",
            Self::ArbMainnet => "arb-mainnet",
            Self::OptMainnet => "opt-mainnet",
            Self::BaseMainnet => "base-mainnet",
        }
    }

    /// Returns the JSON-RPC endpoint for the token API, authenticated with `api_key`.
    #[must_use]
    pub fn alchemy_url(&self, api_key: &str) -> String {
        format!(
            "https://{}.g.alchemy.com/v2/{}",
            self.alchemy_subdomain(),
            api_key
        )
    }

    /// Returns the block explorer base URL.
    #[must_use]
    pub const fn explorer_url(&self) -> &str {
        match self {
            Self::EthMainnet => "https://etherscan.io",
            Self::EthSepolia => "https://sepolia.etherscan.io",
            Self::EthHolesky => "https://holesky.etherscan.io",
            Self::PolygonMainnet => "https://polygonscan.com",
            Self::ArbMainnet => "https://arbiscan.io",
            Self::OptMainnet => "https://optimistic.etherscan.io",
            Self::BaseMainnet => "https://basescan.org",
        }
    }

    /// Returns the explorer page for a token contract.
    #[must_use]
    pub fn token_url(&self, contract_address: &str) -> String {
        format!("{}/token/{}", self.explorer_url(), contract_address)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
