//! Domain types for the ERC-20 token indexer.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for wallet and token API operations
//! - [`network`] - Supported EVM networks and their endpoints
//! - [`token`] - Balance records, metadata and the joined query result
//! - [`units`] - Raw magnitude parsing and fixed-point formatting

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod network;
pub mod token;
pub mod units;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::IndexerError;
pub use network::Network;
pub use token::{QueryResult, TokenBalance, TokenHolding, TokenMetadata};
pub use units::parse_magnitude;
