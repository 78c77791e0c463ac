//! Non-fatal analysis errors
//!
//! These are accumulated while scanning and returned with the result. They never
//! abort an analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes reported in [`AnalysisError::code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A modifier was recognized but what follows matches no known pattern
    NotUnderstood,
    /// A modifier needs an argument and none is available
    MissingArgument,
    /// A quantity comparison has no unit
    MissingUnit,
    /// A quantity comparison uses a word that is not a known unit
    InvalidUnit,
    /// An explicit location phrase did not resolve
    LocationNotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NotUnderstood => write!(f, "NOT_UNDERSTOOD"),
            ErrorCode::MissingArgument => write!(f, "MISSING_ARGUMENT"),
            ErrorCode::MissingUnit => write!(f, "MISSING_UNIT"),
            ErrorCode::InvalidUnit => write!(f, "INVALID_UNIT"),
            ErrorCode::LocationNotFound => write!(f, "LOCATION_NOT_FOUND"),
        }
    }
}

/// An error recorded against a word position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisError {
    pub code: ErrorCode,
    /// The word (or phrase) the error is about
    pub context: String,
    /// Index of that word in the processed words
    pub position: usize,
}

impl AnalysisError {
    pub fn new(code: ErrorCode, context: impl Into<String>, position: usize) -> Self {
        Self {
            code,
            context: context.into(),
            position,
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' at word {}", self.code, self.context, self.position)
    }
}
