//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Library crates keep their own error enums and classify them into one of
/// these variants at the process boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Nothing in the dataset matched the request.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller passed an argument that cannot be satisfied.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The dataset is in a shape the operation cannot handle.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Arithmetic failure (overflow, empty reduction).
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound(_) => 3,
            Self::InvalidArgument(_) => 4,
            Self::InvalidState(_) => 5,
            Self::Arithmetic(_) => 6,
            Self::Config(_) => 78,
            Self::Io(_) => 74,
        }
    }

    /// Returns the stable error code used in log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Arithmetic(_) => "ARITHMETIC_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
