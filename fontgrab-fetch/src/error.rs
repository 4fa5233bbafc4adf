//! Fetch error types.

use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed after the retry budget was exhausted.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote endpoint returned an empty body.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected, non-retryable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] fontgrab_core::CoreError),
}
