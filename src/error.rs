//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Form or input validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Message suitable for showing inline next to a form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_user_message_is_bare() {
        let err = AppError::validation("Please fill in all fields");
        assert_eq!(err.user_message(), "Please fill in all fields");
        assert_eq!(err.to_string(), "Validation error: Please fill in all fields");
    }

    #[test]
    fn test_config_error_wraps() {
        let err: AppError = ConfigError::Validation("bad".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
