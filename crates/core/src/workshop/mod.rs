//! Query catalogue over the holding dataset.
//!
//! [`Workshop`] owns the generated tree and answers every query by walking it
//! with iterator pipelines. Queries are split by the level of the tree they
//! start from:
//!
//! - `holdings` - holding level counts and names
//! - `companies` - company names, grouping and balances
//! - `accounts` - account and currency queries
//! - `users` - user filtering, ranking, partitioning and sampling
//! - `money` - conversion of accounts into PLN
//! - `export` - pipe-delimited account dump

mod accounts;
mod companies;
pub mod error;
mod export;
mod holdings;
mod money;
mod users;


pub use error::WorkshopError;
pub use export::FIELD_SEPARATOR;

use tracing::debug;

use crate::domain::{Account, Company, Holding, User};
use crate::mock::HoldingMockGenerator;

/// Result type alias using `WorkshopError`.
pub type WorkshopResult<T> = Result<T, WorkshopError>;

/// Read-only façade over a generated holdings tree.
#[derive(Debug, Clone)]
pub struct Workshop {
    holdings: Vec<Holding>,
}

impl Workshop {
    /// Creates a workshop over the mock fixture.
    #[must_use]
    pub fn new() -> Self {
        Self::from_holdings(HoldingMockGenerator::new().generate())
    }

    /// Creates a workshop over an arbitrary tree.
    #[must_use]
    pub fn from_holdings(holdings: Vec<Holding>) -> Self {
        debug!(holdings = holdings.len(), "Workshop dataset loaded");
        Self { holdings }
    }

    /// The holdings, in generation order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Every company across all holdings.
    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.holdings.iter().flat_map(|h| h.companies.iter())
    }

    /// Every user across all companies.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.companies().flat_map(|c| c.users.iter())
    }

    /// Every account across all users.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.users().flat_map(|u| u.accounts.iter())
    }
}

impl Default for Workshop {
    fn default() -> Self {
        Self::new()
    }
}
