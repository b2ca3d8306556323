//! Business code formatting and generation.

/// Formats a member code such as `MBH-007`. Numbers are zero-padded to three digits
/// and grow past three digits when needed.
pub fn format_member_code(prefix: &str, number: i64) -> String {
    format!("{}-{:03}", prefix, number)
}

/// Extracts the number from a member code issued under `prefix`.
///
/// # Returns
/// - `Some(i64)` - The numeric part of `PREFIX-NNN`
/// - `None` - The code uses another prefix or its suffix is not all digits
pub fn parse_member_number(prefix: &str, code: &str) -> Option<i64> {
    let digits = code.strip_prefix(prefix)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Generates an order code: the first eight hex digits of a random UUID, upper-cased.
pub fn generate_order_code() -> String {
    let mut code = uuid::Uuid::new_v4().simple().to_string();
    code.truncate(8);
    code.to_ascii_uppercase()
}
