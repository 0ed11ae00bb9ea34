//! HTTP clients for the wallet and the token data API.
//!
//! - [`wallet`] - EIP-1193 style wallet provider (`eth_accounts`, `eth_requestAccounts`)
//! - [`alchemy`] - Token balances and metadata
//! - [`rpc`] - JSON-RPC 2.0 transport shared by both
//! - [`http`] - Pooled reqwest client

pub mod alchemy;
pub mod http;
pub mod rpc;
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use alchemy::{AlchemyClient, TokenDataApi};
pub use http::{HttpClient, HttpConfig};
pub use wallet::WalletConnector;
