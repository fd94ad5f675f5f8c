//! User entity and sex classification.

use serde::{Deserialize, Serialize};

use super::account::Account;

/// Sex of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    /// Man
    Man,
    /// Woman
    Woman,
    /// Other
    Other,
}

/// An employee and the accounts they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Age in years.
    pub age: u32,
    /// Sex.
    pub sex: Sex,
    /// Accounts in generation order.
    pub accounts: Vec<Account>,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        sex: Sex,
        accounts: Vec<Account>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            sex,
            accounts,
        }
    }

    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the user is 18 or older.
    #[must_use]
    pub const fn is_adult(&self) -> bool {
        self.age >= 18
    }
}

/// Matches users whose sex is [`Sex::Woman`].
#[must_use]
pub fn is_woman(user: &User) -> bool {
    user.sex == Sex::Woman
}

/// Matches users whose sex is [`Sex::Man`].
#[must_use]
pub fn is_man(user: &User) -> bool {
    matches!(user.sex, Sex::Man)
}
