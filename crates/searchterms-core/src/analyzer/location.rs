//! Place name extraction
//!
//! ```text
//! where ::= IN place | place
//! ```
//!
//! Places are resolved through a [`Gazetteer`], longest phrase first.

use std::ops::Range;
use tracing::debug;

use super::config::AnalyzerConfig;
use super::errors::ErrorCode;
use super::processor::Processor;
use super::words::{Facet, WordStream};
use crate::dictionary::{Dictionary, DictionaryExt, LocationModifier};
use crate::gazetteer::{Gazetteer, Location};

/// Extracts [`Location`]s
pub struct LocationProcessor<'a> {
    dictionary: &'a dyn Dictionary,
    gazetteer: &'a dyn Gazetteer,
    config: &'a AnalyzerConfig,
    result: Vec<Location>,
}

impl<'a> LocationProcessor<'a> {
    pub fn new(
        dictionary: &'a dyn Dictionary,
        gazetteer: &'a dyn Gazetteer,
        config: &'a AnalyzerConfig,
    ) -> Self {
        Self {
            dictionary,
            gazetteer,
            config,
            result: Vec::new(),
        }
    }

    pub fn result(&self) -> &[Location] {
        &self.result
    }

    pub fn into_result(self) -> Vec<Location> {
        self.result
    }

    /// Resolve a place starting at `position + offset` and claim it together
    /// with everything from `position`.
    fn resolve_at(&mut self, stream: &mut WordStream, position: usize, offset: usize) -> bool {
        let at = position + offset;
        let gazetteer = self.gazetteer;
        let found = stream.longest_match(at, self.config.max_location_words, |phrase| {
            gazetteer.resolve(phrase)
        });
        match found {
            Some((location, len)) => self.emit(stream, position..at + len, location),
            None => false,
        }
    }

    fn emit(&mut self, stream: &mut WordStream, span: Range<usize>, location: Location) -> bool {
        if !stream.consume_span(span.clone(), Self::FACET) {
            return false;
        }
        debug!(?span, name = %location.name, "where facet");
        self.result.push(location);
        true
    }
}

impl Processor for LocationProcessor<'_> {
    type Modifier = LocationModifier;

    const FACET: Facet = Facet::Where;

    fn modifier(&self, word: &str) -> Option<LocationModifier> {
        self.dictionary.location_modifier(word)
    }

    fn process_modifier(
        &mut self,
        stream: &mut WordStream,
        modifier: LocationModifier,
        position: usize,
    ) {
        match modifier {
            LocationModifier::In => {
                if self.resolve_at(stream, position, 1) {
                    return;
                }
                let next = position + 1;
                match stream.available(next).map(str::to_string) {
                    Some(word) => stream.record_error(ErrorCode::LocationNotFound, word, next),
                    None => stream.reject_modifier(position),
                }
            }
        }
    }

    fn process_word(&mut self, stream: &mut WordStream, position: usize) {
        self.resolve_at(stream, position, 0);
    }
}
