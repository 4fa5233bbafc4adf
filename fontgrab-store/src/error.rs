//! Store error types.

use thiserror::Error;

/// Error type for persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cached catalog could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote fetch failed while refreshing the cache.
    #[error("Fetch error: {0}")]
    Fetch(#[from] fontgrab_fetch::FetchError),
}
