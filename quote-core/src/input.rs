//! Input coercion shared by editor surfaces.

use rust_decimal::Decimal;

/// Normalizes raw numeric input: trims whitespace and strips commas used as
/// thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses user-typed quantity/price input, coercing anything unusable to 0.
///
/// Empty, whitespace-only, and non-numeric input all yield zero. The
/// editor never raises a validation error for these fields, it just shows
/// the coerced value.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    normalized.parse().unwrap_or_else(|_| {
        if !normalized.is_empty() {
            tracing::debug!(input = %s, "coercing unparseable numeric input to 0");
        }
        Decimal::ZERO
    })
}
