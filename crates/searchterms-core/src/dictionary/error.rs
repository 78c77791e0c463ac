//! Dictionary error types

use thiserror::Error;

use super::traits::Category;

/// Errors that can occur while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// Dictionary file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary file is not valid JSON or has the wrong shape
    #[error("invalid dictionary json: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry maps a word to a tag its category cannot represent
    #[error("invalid {category} tag '{tag}' for word '{word}'")]
    InvalidTag {
        category: Category,
        word: String,
        tag: String,
    },

    /// Entry with an empty word
    #[error("empty word in {0} entries")]
    EmptyWord(Category),
}

/// Result type for dictionary operations
pub type DictionaryResult<T> = Result<T, DictionaryError>;
