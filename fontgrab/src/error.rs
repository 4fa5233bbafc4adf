//! Library error type.

use thiserror::Error;

/// Error type for the fontgrab library surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] fontgrab_core::CoreError),

    /// Fetch error.
    #[error("Fetch error: {0}")]
    Fetch(#[from] fontgrab_fetch::FetchError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] fontgrab_store::StoreError),
}
