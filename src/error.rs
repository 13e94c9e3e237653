//! Error handling for fetchkit

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for fetchkit operations
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("A `{0}` request must have a body")]
    MissingBody(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: StatusCode, body: Value },

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Interceptor error: {0}")]
    Interceptor(String),
}

/// Result type alias for fetchkit operations
pub type Result<T> = std::result::Result<T, FetchError>;
