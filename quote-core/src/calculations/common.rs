//! Shared helpers for money presentation.
//!
//! Calculation itself is exact ([`rust_decimal::Decimal`], no intermediate
//! rounding); rounding happens here, once, at the formatting boundary.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 round away from zero, the standard financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(10.004)), dec!(10.00));
/// assert_eq!(round_half_up(dec!(10.005)), dec!(10.01));
/// assert_eq!(round_half_up(dec!(-10.005)), dec!(-10.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount for display: currency symbol immediately followed by
/// the value rounded to two decimal places.
///
/// Negative amounts keep their sign after the symbol, matching how every
/// surface of the product prints them (`$-500.00`).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(5000), "$"), "$5000.00");
/// assert_eq!(format_currency(dec!(149.985), "€"), "€149.99");
/// ```
pub fn format_currency(
    amount: Decimal,
    symbol: &str,
) -> String {
    format!("{symbol}{:.2}", round_half_up(amount))
}
