//! Crate error type
//!
//! Only the outer collaborators (score stores, config files) can fail.
//! The simulation itself is infallible.

/// Errors raised by storage and configuration backends.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage backend unavailable or rejected the write.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
