//! Account entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use workshop_shared::types::{AccountNumber, Currency};

/// Kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Personal current account, primary.
    Ror1,
    /// Personal current account, secondary.
    Ror2,
    /// Savings account, short term.
    Lo1,
    /// Savings account, long term.
    Lo2,
    /// Foreign currency account.
    Ro1,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Self::Ror1 => "ROR1",
            Self::Ror2 => "ROR2",
            Self::Lo1 => "LO1",
            Self::Lo2 => "LO2",
            Self::Ro1 => "RO1",
        };
        f.write_str(code)
    }
}

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Number, unique within the dataset.
    pub number: AccountNumber,
    /// Balance in `currency`.
    pub amount: Decimal,
    /// Currency the balance is held in.
    pub currency: Currency,
    /// Account kind.
    pub account_type: AccountType,
}

impl Account {
    /// Creates a new account.
    #[must_use]
    pub const fn new(
        number: AccountNumber,
        amount: Decimal,
        currency: Currency,
        account_type: AccountType,
    ) -> Self {
        Self {
            number,
            amount,
            currency,
            account_type,
        }
    }
}
