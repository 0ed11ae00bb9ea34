//! Token amount parsing and fixed-point formatting.
//!
//! Raw ERC-20 balances are `uint256` magnitudes. The API encodes them as
//! strings (hex with a `0x` prefix, occasionally decimal); the UI shows them
//! scaled down by `10^decimals`.

use alloy_primitives::U256;

use super::IndexerError;

/// Decimal count assumed when a token does not report one.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Parses a raw balance magnitude from its API string encoding.
///
/// Accepts `0x`-prefixed hex (a bare `0x` is zero) and plain decimal.
///
/// # Errors
///
/// Returns `IndexerError::Parse` if the string is empty, not a number, or
/// does not fit in 256 bits.
pub fn parse_magnitude(raw: &str) -> Result<U256, IndexerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IndexerError::parse("empty balance value"));
    }

    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some("") => Ok(U256::ZERO),
        Some(hex) => U256::from_str_radix(hex, 16),
        None => U256::from_str_radix(trimmed, 10),
    };

    parsed.map_err(|e| IndexerError::parse(format!("invalid balance '{raw}': {e}")))
}

/// Formats `value / 10^decimals` as a fixed-point string.
///
/// The fractional part has trailing zeros stripped but keeps at least one
/// digit, so whole amounts render as `"1.0"`. With zero decimals only the
/// whole part is returned.
#[must_use]
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let decimals = usize::from(decimals);
    let padded = if digits.len() <= decimals {
        format!("{}{digits}", "0".repeat(decimals - digits.len() + 1))
    } else {
        digits
    };

    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{whole}.{fraction}")
}

// ============================================================================
// Tests
// ============================================================================
