//! Currencies and their fixed conversion rates.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Rates are `rust_decimal::Decimal` values built from integer mantissas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency every amount is normalised to for comparison.
pub const BASE_CURRENCY: Currency = Currency::Pln;

/// ISO 4217 currency codes held by accounts in the dataset.
///
/// Variants are declared in code order so the derived `Ord` sorts them the
/// same way their codes sort as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Swiss Franc
    Chf,
    /// Euro
    Eur,
    /// Polish Zloty
    Pln,
    /// US Dollar
    Usd,
}

impl Currency {
    /// Every supported currency, in code order.
    pub const ALL: [Self; 4] = [Self::Chf, Self::Eur, Self::Pln, Self::Usd];

    /// Multiplicative rate converting one unit of this currency into PLN.
    ///
    /// Always strictly positive and fixed for the process lifetime.
    #[must_use]
    pub const fn rate(self) -> Decimal {
        match self {
            Self::Chf => Decimal::from_parts(382, 0, 0, false, 2),
            Self::Eur => Decimal::from_parts(431, 0, 0, false, 2),
            Self::Pln => Decimal::ONE,
            Self::Usd => Decimal::from_parts(372, 0, 0, false, 2),
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Eur => "EUR",
            Self::Pln => "PLN",
            Self::Usd => "USD",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CHF" => Ok(Self::Chf),
            "EUR" => Ok(Self::Eur),
            "PLN" => Ok(Self::Pln),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(Currency::Chf, dec!(3.82))]
    #[case(Currency::Eur, dec!(4.31))]
    #[case(Currency::Pln, dec!(1))]
    #[case(Currency::Usd, dec!(3.72))]
    fn test_currency_rate(#[case] currency: Currency, #[case] expected: Decimal) {
        assert_eq!(currency.rate(), expected);
    }

    const CHF_RATE: Decimal = Currency::Chf.rate();

    #[test]
    fn test_rate_is_usable_in_const_context() {
        assert_eq!(CHF_RATE, dec!(3.82));
        assert_eq!(CHF_RATE.scale(), 2);
    }

    #[test]
    fn test_rates_are_positive() {
        for currency in Currency::ALL {
            assert!(currency.rate() > Decimal::ZERO, "{currency} rate must be positive");
        }
    }

    #[test]
    fn test_base_currency_rate_is_one() {
        assert_eq!(BASE_CURRENCY.rate(), Decimal::ONE);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::Chf.to_string(), "CHF");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Pln.to_string(), "PLN");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!(Currency::from_str("PLN").unwrap(), Currency::Pln);
        assert_eq!(Currency::from_str("pln").unwrap(), Currency::Pln);
        assert_eq!(Currency::from_str("CHF").unwrap(), Currency::Chf);
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
        assert_eq!(Currency::from_str("USD").unwrap(), Currency::Usd);

        assert!(Currency::from_str("IDR").is_err());
        assert!(Currency::from_str("").is_err());
    }

    #[test]
    fn test_ordering_matches_code_ordering() {
        let mut by_code = Currency::ALL.to_vec();
        by_code.sort_by_key(|c| c.code());
        assert_eq!(by_code, Currency::ALL.to_vec());
    }
}
