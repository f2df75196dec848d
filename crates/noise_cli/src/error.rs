//! CLI error types.

use noise_core::NoiseError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `noise` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A generator or sampler rejected its parameters.
    #[error("Noise error: {0}")]
    Noise(#[from] NoiseError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A command argument was missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_error_converts() {
        let err: CliError = NoiseError::InvalidLambda(50.0).into();
        assert!(matches!(err, CliError::Noise(_)));
        assert!(err.to_string().contains("lambda 50"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("missing --items".to_string());
        assert_eq!(err.to_string(), "Invalid argument: missing --items");
    }
}
