//! Shared types, errors, and configuration for the holding workshop.
//!
//! This crate provides common types used across all other crates:
//! - Currencies with their fixed conversion rate to PLN
//! - Typed account numbers
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
