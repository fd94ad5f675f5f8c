//! Common types used across the workspace.

pub mod money;
pub mod number;

pub use money::{BASE_CURRENCY, Currency};
pub use number::{AccountNumber, InvalidAccountNumber};
