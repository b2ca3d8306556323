//! Conversion between stored minor units and decimal amounts.

use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Converts minor units (cents) to a two-decimal amount.
pub fn to_decimal(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

/// Converts a decimal amount to minor units, rounding half away from zero to the cent.
///
/// # Returns
/// - `Some(i64)` - Amount in minor units
/// - `None` - The amount does not fit in an `i64`
pub fn from_decimal(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Formats minor units with exactly two decimals, e.g. `5000` as `50.00`.
pub fn format_amount(minor: i64) -> String {
    to_decimal(minor).to_string()
}
