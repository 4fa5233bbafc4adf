//! Core error types for fontgrab.

use thiserror::Error;

/// Core error type for fontgrab operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A variant key did not have the `<weight>[i]` form.
    #[error("Invalid variant key: {0}")]
    InvalidVariantKey(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
