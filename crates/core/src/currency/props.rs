//! Property-based tests for currency conversion.
//!
//! - Conversion keeps at most 4 significant digits
//! - PLN conversion only rounds
//! - Rounding error stays within half a unit of the last kept digit

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use workshop_shared::types::Currency;

use super::conversion::{SIGNIFICANT_DIGITS, to_base};

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn any_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Number of significant digits in a non-zero decimal.
fn significant_digits(value: Decimal) -> u32 {
    let mut mantissa = value.mantissa().unsigned_abs();
    while mantissa % 10 == 0 {
        mantissa /= 10;
    }
    mantissa.to_string().len().try_into().unwrap_or(u32::MAX)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and currency, the result SHALL have at most
    /// 4 significant digits.
    #[test]
    fn prop_conversion_keeps_four_significant_digits(
        amount in positive_amount(),
        currency in any_currency(),
    ) {
        let result = to_base(amount, currency).unwrap();
        prop_assert!(
            significant_digits(result) <= SIGNIFICANT_DIGITS,
            "{} has more than {} significant digits",
            result,
            SIGNIFICANT_DIGITS
        );
    }

    /// *For any* amount, converting PLN SHALL only round the amount.
    #[test]
    fn prop_pln_conversion_only_rounds(amount in positive_amount()) {
        let result = to_base(amount, Currency::Pln).unwrap();
        let expected = amount
            .round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .unwrap();
        prop_assert_eq!(result, expected);
    }

    /// *For any* PLN amount, converting the converted value again SHALL
    /// return it unchanged.
    #[test]
    fn prop_pln_conversion_is_idempotent(amount in positive_amount()) {
        let once = to_base(amount, Currency::Pln).unwrap();
        let twice = to_base(once, Currency::Pln).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// *For any* amount and currency, the rounding error SHALL be at most half
    /// a unit in the 4th significant digit (relative error ≤ 0.0005).
    #[test]
    fn prop_rounding_error_is_bounded(
        amount in positive_amount(),
        currency in any_currency(),
    ) {
        let exact = amount * currency.rate();
        let result = to_base(amount, currency).unwrap();
        let error = (result - exact).abs();
        prop_assert!(
            error <= exact * Decimal::new(5, 4),
            "|{} - {}| exceeds half a unit",
            result,
            exact
        );
    }

    /// *For any* positive amount, the converted amount SHALL be positive.
    #[test]
    fn prop_positive_inputs_positive_output(
        amount in positive_amount(),
        currency in any_currency(),
    ) {
        prop_assert!(to_base(amount, currency).unwrap() > Decimal::ZERO);
    }
}
