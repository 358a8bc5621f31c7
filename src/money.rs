//! Cent rounding, formatting and parsing of monetary amounts
//!
//! All amounts are carried at full `Decimal` precision through the
//! projections. Rounding to cents happens only when a value is rendered or
//! reconciled against rendered values, always half-up (midpoint away from
//! zero).

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fraction digits in a rendered amount
pub const CENT_DIGITS: u32 = 2;

/// Display value for a year with no snapshot
pub const ZERO_DISPLAY: &str = "0.00";

/// Round to whole cents, half-up.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
}

/// Render with exactly two fraction digits, e.g. `40650.41` or `0.00`.
pub fn format_cents(value: Decimal) -> String {
    let mut rounded = round_cents(value);
    // round_dp never adds digits, so pad short scales up to cents
    rounded.rescale(CENT_DIGITS);
    if rounded.is_zero() {
        // -0.00 renders as 0.00
        return ZERO_DISPLAY.to_string();
    }
    rounded.to_string()
}

/// Parse user-entered text into an amount.
///
/// Surrounding whitespace is ignored. Plain and scientific notation are
/// accepted; anything else, including the empty string and digit separators
/// such as `1_000`, is `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(dec!(40650.405)), dec!(40650.41));
        assert_eq!(round_cents(dec!(40650.404999)), dec!(40650.40));
        assert_eq!(round_cents(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_format_cents_pads_and_rounds() {
        assert_eq!(format_cents(dec!(50000)), "50000.00");
        assert_eq!(format_cents(dec!(1.5)), "1.50");
        assert_eq!(format_cents(dec!(1000000) / dec!(24.6)), "40650.41");
        assert_eq!(format_cents(Decimal::ZERO), ZERO_DISPLAY);
        assert_eq!(format_cents(dec!(-0.001)), ZERO_DISPLAY);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("500.00"), Some(dec!(500.00)));
        assert_eq!(parse_amount("  12 "), Some(dec!(12)));
        assert_eq!(parse_amount("-250.5"), Some(dec!(-250.5)));
        assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("12abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("1_000"), None);
        assert_eq!(parse_amount("1_0e3"), None);
    }
}
