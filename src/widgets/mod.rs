//! Widgets for the token balance viewer.
//!
//! - [`token_card`]: one bordered card per token in the results grid

pub mod token_card;

pub use token_card::TokenCard;
