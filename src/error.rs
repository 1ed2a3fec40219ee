//! Error types for Converse.

use thiserror::Error;

/// Primary error type for all Converse operations.
#[derive(Error, Debug)]
pub enum ConverseError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ConverseError {
    /// Create an API error from a status code and body text.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConverseError>;
