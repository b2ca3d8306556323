use std::str::FromStr;

use rust_decimal::Decimal;

use crate::server::util::money;

/// Parses a price typed into a form field into minor units.
///
/// Accepts a plain decimal such as `250` or `19.99`.
///
/// # Arguments
/// - `value` - Raw form value
///
/// # Returns
/// - `Some(i64)` - Price in minor units
/// - `None` - The value is not a decimal number
pub fn parse_price(value: &str) -> Option<i64> {
    let amount = Decimal::from_str(value.trim()).ok()?;
    money::from_decimal(amount)
}

/// Parses a checkbox-style boolean form value.
///
/// # Returns
/// - `Some(true)` - `true`, `1`, `on` or `yes` in any casing
/// - `Some(false)` - `false`, `0`, `off` or `no` in any casing
/// - `None` - Any other value
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Returns the trimmed value, or `None` when nothing but whitespace was submitted.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
