//! Domain-specific error types for idea-forge

use thiserror::Error;

/// Main error type for idea generation
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {message}")]
    Malformed { message: String },
}

impl From<reqwest::Error> for ForgeError {
    fn from(err: reqwest::Error) -> Self {
        ForgeError::Transport {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        ForgeError::Malformed {
            message: err.to_string(),
        }
    }
}

/// Result type alias for idea-forge operations
pub type Result<T> = std::result::Result<T, ForgeError>;
