//! Error types for the command-line application.

use thiserror::Error;

use crate::core::PrimeError;
use crate::services::InputError;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Input document error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Scoring error
    #[error("Scoring error: {0}")]
    Prime(#[from] PrimeError),

    /// Invalid setting value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
