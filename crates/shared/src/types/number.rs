//! Typed account numbers.
//!
//! Using a typed number prevents accidentally passing a person's name where an
//! account reference is expected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not a well-formed account number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid account number: {0:?}")]
pub struct InvalidAccountNumber(pub String);

/// Prefix of numbers issued by [`AccountNumber::sequential`].
pub const DOMESTIC_PREFIX: &str = "PL";

/// Unique identifier of a bank account.
///
/// Non-empty, ASCII alphanumeric. Ordering is lexical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Creates an account number after validating its characters.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidAccountNumber> {
        let value = value.into();
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidAccountNumber(value));
        }
        Ok(Self(value))
    }

    /// Issues the domestic number for a sequence position: `1` → `PL10001`.
    #[must_use]
    pub fn sequential(seq: u16) -> Self {
        Self(format!("{DOMESTIC_PREFIX}{}", 10_000 + u32::from(seq)))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for AccountNumber {
    type Err = InvalidAccountNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
