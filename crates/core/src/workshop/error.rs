//! Workshop error types.

use std::path::PathBuf;

use thiserror::Error;
use workshop_shared::AppError;

use crate::currency::CurrencyError;
use crate::domain::AccountType;

/// Errors that can occur while answering queries.
#[derive(Debug, Error)]
pub enum WorkshopError {
    /// No user satisfies the predicate.
    #[error("No user matches the given predicate")]
    UserNotFound,

    /// No single account type is strictly more common than every other.
    #[error("No dominant account type among {candidates:?}")]
    NoDominantAccountType {
        /// Types sharing the highest count; empty when there are no accounts.
        candidates: Vec<AccountType>,
    },

    /// A reduction without an identity element ran over nothing.
    #[error("Cannot aggregate an empty collection of {0}")]
    EmptyAggregation(&'static str),

    /// More unique users were requested than the pool holds.
    #[error("Requested {requested} unique users but only {available} exist")]
    NotEnoughUsers {
        /// Requested sample size.
        requested: usize,
        /// Pool size.
        available: usize,
    },

    /// Currency conversion failed.
    #[error(transparent)]
    Currency(#[from] CurrencyError),

    /// Writing the account export failed.
    #[error("Failed to export accounts to {path}: {source}")]
    Export {
        /// Target file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<WorkshopError> for AppError {
    fn from(err: WorkshopError) -> Self {
        let message = err.to_string();
        match err {
            WorkshopError::UserNotFound => Self::NotFound(message),
            WorkshopError::NotEnoughUsers { .. } => Self::InvalidArgument(message),
            WorkshopError::NoDominantAccountType { .. } => Self::InvalidState(message),
            WorkshopError::EmptyAggregation(_) | WorkshopError::Currency(_) => {
                Self::Arithmetic(message)
            }
            WorkshopError::Export { .. } => Self::Io(message),
        }
    }
}
