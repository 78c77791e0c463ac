//! Free-text query analyzer
//!
//! Turns a natural-language search query into structured facets:
//!
//! - **what**: keywords and quantity comparisons (`cloud cover lesser than 10%`)
//! - **when**: time ranges (`between march and may 2012`, `last 2 years`)
//! - **where**: gazetteer places (`in france`), only when a gazetteer is configured
//!
//! # Passes
//!
//! ```text
//! sentence pass ::= what(modifiers) when(modifiers) where(modifiers)
//! word pass     ::= what(words)     when(words)     where(words)
//! ```
//!
//! Each processor scans every position before the next one starts, so earlier
//! processors win when patterns overlap. A word claimed once is never claimed
//! again.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use searchterms_core::analyzer::QueryAnalyzer;
//!
//! let analyzer = QueryAnalyzer::english();
//! let now = Utc.with_ymd_and_hms(2014, 6, 15, 0, 0, 0).unwrap();
//! let result = analyzer.analyze_at("spot5 images with forest in 2012", now).unwrap();
//! assert_eq!(result.what.len(), 2);
//! assert_eq!(result.when.len(), 1);
//! assert!(result.errors.is_empty());
//! ```

mod config;
mod errors;
mod location;
mod processor;
mod result;
mod temporal;
mod what;
mod when;
mod words;

pub use config::AnalyzerConfig;
pub use errors::{AnalysisError, ErrorCode};
pub use location::LocationProcessor;
pub use processor::Processor;
pub use result::{AnalysisResult, Comparator, WhatFacet};
pub use temporal::{DateSpec, TimeRange};
pub use what::WhatProcessor;
pub use when::WhenProcessor;
pub use words::{tokenize, Claim, Facet, Word, WordStream};

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

use crate::dictionary::{Dictionary, MemoryDictionary};
use crate::gazetteer::Gazetteer;

/// Errors that prevent an analysis from running at all
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("missing mandatory search terms")]
    MissingQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Sentence,
    Word,
}

/// Run one pass of `processor` over every position of `stream`.
fn run_pass<P: Processor>(processor: &mut P, stream: &mut WordStream, pass: Pass) {
    for position in 0..stream.len() {
        match pass {
            Pass::Sentence => {
                let modifier = stream
                    .available(position)
                    .and_then(|word| processor.modifier(word));
                if let Some(modifier) = modifier {
                    processor.process_modifier(stream, modifier, position);
                }
            }
            Pass::Word => {
                if stream.is_valid_position(position) {
                    processor.process_word(stream, position);
                }
            }
        }
    }
}

/// Both passes of a single processor, for processor-level tests
#[cfg(test)]
pub(crate) fn run_both<P: Processor>(processor: &mut P, stream: &mut WordStream) {
    run_pass(processor, stream, Pass::Sentence);
    run_pass(processor, stream, Pass::Word);
}

/// Query analyzer bound to a dictionary and, optionally, a gazetteer.
///
/// Holds no per-query state; one instance can serve concurrent callers.
#[derive(Clone)]
pub struct QueryAnalyzer {
    dictionary: Arc<dyn Dictionary>,
    gazetteer: Option<Arc<dyn Gazetteer>>,
    config: AnalyzerConfig,
}

impl QueryAnalyzer {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            gazetteer: None,
            config: AnalyzerConfig::default(),
        }
    }

    /// Analyzer over the built-in English vocabulary, without gazetteer
    pub fn english() -> Self {
        Self::new(Arc::new(MemoryDictionary::english()))
    }

    /// Enable the where processor.
    pub fn with_gazetteer(mut self, gazetteer: Arc<dyn Gazetteer>) -> Self {
        self.gazetteer = Some(gazetteer);
        self
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dictionary.as_ref()
    }

    pub fn location_enabled(&self) -> bool {
        self.gazetteer.is_some()
    }

    /// Analyze `query` against the current time.
    pub fn analyze(&self, query: &str) -> Result<AnalysisResult, AnalyzeError> {
        self.analyze_at(query, Utc::now())
    }

    /// Analyze `query` with relative dates computed from `now`.
    pub fn analyze_at(
        &self,
        query: &str,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalyzeError> {
        let started = Instant::now();
        let dictionary = self.dictionary.as_ref();

        let mut stream = WordStream::new(dictionary, query);
        if stream.is_empty() {
            return Err(AnalyzeError::MissingQuery);
        }

        let mut what = WhatProcessor::new(dictionary, &self.config);
        let mut when = WhenProcessor::new(dictionary, &self.config, now);
        let mut location = self
            .gazetteer
            .as_deref()
            .map(|gazetteer| LocationProcessor::new(dictionary, gazetteer, &self.config));

        for pass in [Pass::Sentence, Pass::Word] {
            run_pass(&mut what, &mut stream, pass);
            run_pass(&mut when, &mut stream, pass);
            if let Some(location) = location.as_mut() {
                run_pass(location, &mut stream, pass);
            }
        }

        let (processed_words, errors) = stream.into_parts();
        let result = AnalysisResult {
            query: query.to_string(),
            language: dictionary.language().to_string(),
            processed_words,
            what: what.into_result(),
            when: when.into_result(),
            locations: location
                .map(LocationProcessor::into_result)
                .unwrap_or_default(),
            errors,
            processing_time_seconds: started.elapsed().as_secs_f64(),
        };

        debug!(
            query,
            what = result.what.len(),
            when = result.when.len(),
            locations = result.locations.len(),
            errors = result.errors.len(),
            "analyzed query"
        );
        Ok(result)
    }
}
