use crate::config::ConfigValidationError;
use thiserror::Error;

/// Main error type for hyperdraft operations
#[derive(Debug, Error)]
pub enum HyperdraftError {
    #[error("{0}")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl HyperdraftError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn logging<S: Into<String>>(msg: S) -> Self {
        Self::LoggingError(msg.into())
    }
}

/// Result type alias for hyperdraft operations
pub type Result<T> = std::result::Result<T, HyperdraftError>;
