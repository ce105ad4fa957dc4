//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// Per-line conditions such as under-length lines are not errors; they are
/// collected in [`crate::ProcessingReport`].
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error, rejected before any processing starts
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (I/O, encoding)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<crate::domain::DomainError> for Error {
    fn from(err: crate::domain::DomainError) -> Self {
        Error::Configuration(err.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Configuration(format!("invalid label pattern: {err}"))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration(format!("invalid config file: {err}"))
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
