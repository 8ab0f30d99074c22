//! Wire-format transforms for order registration
//!
//! The gateway takes amounts in minor units and rejects long descriptions.

use crate::core::{AppError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Minor units per major currency unit (kopecks, cents)
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Longest description the gateway accepts, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 24;

/// Converts a decimal amount to minor units, rounding any fraction of a minor unit up.
///
/// `10.001` becomes `1001`, never `1000`.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    amount
        .checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))
        .map(|scaled| scaled.ceil())
        .and_then(|minor| minor.to_i64())
        .ok_or_else(|| AppError::validation(format!("Amount out of range: {}", amount)))
}

/// Keeps at most `DESCRIPTION_MAX_CHARS` characters, cutting on a char boundary.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((cut, _)) => description[..cut].to_string(),
        None => description.to_string(),
    }
}
