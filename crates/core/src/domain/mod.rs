//! Domain entities of the holding dataset.
//!
//! The tree is Holding → Company → User → Account. Every entity owns its
//! children exclusively and nothing is mutated after generation.

pub mod account;
pub mod company;
pub mod holding;
pub mod user;

pub use account::{Account, AccountType};
pub use company::Company;
pub use holding::Holding;
pub use user::{Sex, User, is_man, is_woman};
