//! Company entity.

use serde::{Deserialize, Serialize};

use super::user::User;

/// A company and its employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Employees in generation order.
    pub users: Vec<User>,
}

impl Company {
    /// Creates a new company.
    #[must_use]
    pub fn new(name: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            name: name.into(),
            users,
        }
    }

    /// Number of employees.
    #[must_use]
    pub fn employee_count(&self) -> usize {
        self.users.len()
    }
}
