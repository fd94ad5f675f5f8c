//! Currency conversion error types.

use rust_decimal::Decimal;
use thiserror::Error;
use workshop_shared::types::Currency;

/// Errors that can occur while converting amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// `amount × rate` does not fit in a `Decimal`.
    #[error("Conversion overflow: {amount} {currency}")]
    Overflow {
        /// Amount being converted.
        amount: Decimal,
        /// Source currency.
        currency: Currency,
    },

    /// Rounding to the requested number of significant digits is impossible.
    #[error("Cannot round {value} to {digits} significant digits")]
    Rounding {
        /// Value being rounded.
        value: Decimal,
        /// Requested significant digits.
        digits: u32,
    },
}
