//! Error types for rusty-xe

use thiserror::Error;

/// Main error type for rusty-xe
#[derive(Error, Debug)]
pub enum XeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Rate for {currency} missing from {context}")]
    MissingRate { currency: String, context: String },

    #[error("Data error: {0}")]
    DataError(String),

    #[error("{url}: {operation}: {message}")]
    HttpError {
        url: String,
        operation: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl XeError {
    /// HTTP failure tagged with the request url and the client operation
    pub fn http(url: impl Into<String>, operation: impl Into<String>, message: impl ToString) -> Self {
        XeError::HttpError {
            url: url.into(),
            operation: operation.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for rusty-xe operations
pub type Result<T> = std::result::Result<T, XeError>;
