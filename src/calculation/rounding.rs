//! Rounding rules for money and display rates.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on money figures.
pub const CURRENCY_DP: u32 = 2;

/// Decimal places kept on effective rates shown for display.
pub const RATE_DP: u32 = 4;

/// Rounds a money figure to cents, halves away from zero.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("246.1538").unwrap()), Decimal::from_str("246.15").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an effective rate to four decimal places.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_currency(dec("2.345")), dec("2.35"));
        assert_eq!(round_currency(dec("2.355")), dec("2.36"));
        assert_eq!(round_currency(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_already_rounded_is_unchanged() {
        assert_eq!(round_currency(dec("2000.00")), dec("2000.00"));
        assert_eq!(round_currency(dec("29")), dec("29"));
    }

    #[test]
    fn test_round_rate() {
        assert_eq!(round_rate(dec("0.065385")), dec("0.0654"));
    }
}
