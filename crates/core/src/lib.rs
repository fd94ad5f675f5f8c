//! Core logic of the holding workshop.
//!
//! This crate contains the dataset, money conversion and the query
//! catalogue. The only I/O it performs is the account export.
//!
//! # Modules
//!
//! - `domain` - Holding, company, user and account entities
//! - `mock` - Deterministic fixture generator
//! - `currency` - Conversion of balances into PLN
//! - `workshop` - Query façade over the generated tree

pub mod currency;
pub mod domain;
pub mod mock;
pub mod workshop;

pub use mock::HoldingMockGenerator;
pub use workshop::{Workshop, WorkshopError, WorkshopResult};
