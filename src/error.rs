//! Error types for NebulaAI core operations.

use thiserror::Error;

/// Main error type for NebulaAI core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// An upstream API call failed
    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Create an API error with an optional HTTP status code.
    pub fn api(message: impl Into<String>, status_code: Option<u16>) -> Self {
        CoreError::Api {
            message: message.into(),
            status_code,
        }
    }

    /// Machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::Api { .. } => "API_ERROR",
            CoreError::Config(_) => "CONFIG_ERROR",
            CoreError::Io(_) => "IO_ERROR",
        }
    }

    /// HTTP status code carried by an API error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CoreError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

/// Result type alias for NebulaAI core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
