//! Conversion of account balances into the base currency.

pub mod conversion;
pub mod error;

#[cfg(test)]
mod props;

pub use conversion::{SIGNIFICANT_DIGITS, round_significant, to_base};
pub use error::CurrencyError;
