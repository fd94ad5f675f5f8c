//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for conversion into PLN:
//! - Round to 4 significant digits, not decimal places
//! - Midpoints round away from zero (half-up), never to even
//! - Round each converted amount before any summation

use rust_decimal::{Decimal, RoundingStrategy};
use workshop_shared::types::Currency;

use super::error::CurrencyError;

/// Significant digits kept by every conversion into the base currency.
pub const SIGNIFICANT_DIGITS: u32 = 4;

/// Converts `amount` held in `currency` into PLN.
///
/// Computes `amount × currency.rate()` and rounds the product to
/// [`SIGNIFICANT_DIGITS`] significant digits, half-up.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use workshop_core::currency::to_base;
/// use workshop_shared::types::Currency;
///
/// // 230.00 EUR * 4.31 = 991.30 PLN
/// assert_eq!(to_base(dec!(230.00), Currency::Eur).unwrap(), dec!(991.3));
/// ```
pub fn to_base(amount: Decimal, currency: Currency) -> Result<Decimal, CurrencyError> {
    let converted = amount
        .checked_mul(currency.rate())
        .ok_or(CurrencyError::Overflow { amount, currency })?;
    round_significant(converted, SIGNIFICANT_DIGITS)
}

/// Rounds `value` to `digits` significant digits, midpoints away from zero.
///
/// `digits` must be at least 1.
pub fn round_significant(value: Decimal, digits: u32) -> Result<Decimal, CurrencyError> {
    if digits == 0 {
        return Err(CurrencyError::Rounding { value, digits });
    }
    value
        .round_sf_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        .ok_or(CurrencyError::Rounding { value, digits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1520.50), Currency::Pln, dec!(1521))]
    #[case(dec!(450.25), Currency::Pln, dec!(450.3))]
    #[case(dec!(120.75), Currency::Pln, dec!(120.8))]
    #[case(dec!(95.10), Currency::Pln, dec!(95.10))]
    #[case(dec!(230.00), Currency::Eur, dec!(991.3))]
    #[case(dec!(12000.00), Currency::Usd, dec!(44640))]
    #[case(dec!(3100.40), Currency::Chf, dec!(11840))]
    #[case(dec!(75.25), Currency::Chf, dec!(287.5))]
    fn test_to_base(#[case] amount: Decimal, #[case] currency: Currency, #[case] expected: Decimal) {
        assert_eq!(to_base(amount, currency).unwrap(), expected);
    }

    #[test]
    fn test_midpoint_rounds_half_up_not_to_even() {
        // Banker's rounding would give 1520 and 450.2
        assert_eq!(to_base(dec!(1520.50), Currency::Pln).unwrap(), dec!(1521));
        assert_eq!(to_base(dec!(450.25), Currency::Pln).unwrap(), dec!(450.3));
    }

    #[test]
    fn test_round_significant_integer_part() {
        assert_eq!(round_significant(dec!(95500.00), 4).unwrap(), dec!(95500));
        assert_eq!(round_significant(dec!(57289.2320), 4).unwrap(), dec!(57290));
    }

    #[test]
    fn test_round_significant_zero_digits_fails() {
        assert_eq!(
            round_significant(dec!(1.5), 0),
            Err(CurrencyError::Rounding {
                value: dec!(1.5),
                digits: 0
            })
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = to_base(Decimal::MAX, Currency::Eur);
        assert_eq!(
            result,
            Err(CurrencyError::Overflow {
                amount: Decimal::MAX,
                currency: Currency::Eur
            })
        );
    }
}
