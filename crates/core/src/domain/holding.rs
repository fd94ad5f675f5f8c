//! Holding entity.

use serde::{Deserialize, Serialize};

use super::company::Company;

/// Top-level grouping entity owning companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Holding name.
    pub name: String,
    /// Companies in generation order.
    pub companies: Vec<Company>,
}

impl Holding {
    /// Creates a new holding.
    #[must_use]
    pub fn new(name: impl Into<String>, companies: Vec<Company>) -> Self {
        Self {
            name: name.into(),
            companies,
        }
    }
}
