//! Error types for the description fetcher

use thiserror::Error;

/// Description fetcher error types
#[derive(Error, Debug)]
pub enum AiError {
    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid response format: {0}")]
    InvalidFormat(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, AiError>;
