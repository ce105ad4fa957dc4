use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Window bounds that cannot hold any line
    #[error("Invalid window {min}-{max}: {reason}")]
    InvalidWindow {
        /// Requested minimum
        min: usize,
        /// Requested maximum
        max: usize,
        /// What is wrong with the bounds
        reason: &'static str,
    },
}
