//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No script file matched the input patterns
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration file or override rejected
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(msg) => write!(f, "File not found: {msg}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<linefit_core::Error> for CliError {
    fn from(err: linefit_core::Error) -> Self {
        match err {
            linefit_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::FileNotFound("no files match *.txt".into()).to_string(),
            "File not found: no files match *.txt"
        );
        assert_eq!(
            CliError::InvalidPattern("[oops".into()).to_string(),
            "Invalid file pattern: [oops"
        );
        assert_eq!(
            CliError::ConfigError("bad window".into()).to_string(),
            "Configuration error: bad window"
        );
        assert_eq!(
            CliError::ProcessingError("read failed".into()).to_string(),
            "Processing error: read failed"
        );
    }

    #[test]
    fn test_core_configuration_errors_map_to_config_error() {
        let err: CliError = linefit_core::Error::Configuration("min > max".into()).into();
        assert!(matches!(err, CliError::ConfigError(msg) if msg == "min > max"));

        let err: CliError = linefit_core::Error::InvalidInput("not utf-8".into()).into();
        assert!(matches!(err, CliError::ProcessingError(msg) if msg.contains("not utf-8")));
    }

    #[test]
    fn test_cli_result_carries_cli_errors() {
        let failure: CliResult<()> = Err(CliError::ConfigError("x".into()).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }
}
