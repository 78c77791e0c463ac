//! Error type for the searchterms command line.

use searchterms_core::{AnalyzeError, DictionaryError, GazetteerError};
use thiserror::Error;

/// Anything that makes the command exit non-zero.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Dictionary file could not be loaded
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Gazetteer file could not be loaded
    #[error("gazetteer error: {0}")]
    Gazetteer(#[from] GazetteerError),

    /// The analysis itself was refused
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),

    /// `--now` is not an RFC 3339 timestamp
    #[error("invalid time: {0}")]
    Time(#[from] chrono::ParseError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the CLI [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
