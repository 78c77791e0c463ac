//! Gazetteer error types

use thiserror::Error;

/// Errors that can occur while loading a gazetteer
#[derive(Debug, Error)]
pub enum GazetteerError {
    /// Gazetteer file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Gazetteer file is not valid JSON or has the wrong shape
    #[error("invalid gazetteer json: {0}")]
    Json(#[from] serde_json::Error),

    /// Entry without a usable name
    #[error("gazetteer entry has an empty name")]
    EmptyName,
}

/// Result type for gazetteer operations
pub type GazetteerResult<T> = Result<T, GazetteerError>;
