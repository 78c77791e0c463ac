//! Word stream for one analysis
//!
//! Tokenizes the query once and tracks, per position, which processor claimed
//! the word. Processors only ever flip claims; the sequence length is fixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use tracing::{debug, trace};

use super::errors::{AnalysisError, ErrorCode};
use crate::dictionary::Dictionary;

/// Result category a word was claimed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    What,
    When,
    Where,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::What => write!(f, "what"),
            Facet::When => write!(f, "when"),
            Facet::Where => write!(f, "where"),
        }
    }
}

/// Claim state of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Claim {
    #[default]
    Unclaimed,
    ClaimedBy(Facet),
}

/// One token of the normalized query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub position: usize,
    pub claim: Claim,
}

impl Word {
    pub fn consumed(&self) -> bool {
        self.claim != Claim::Unclaimed
    }

    pub fn facet(&self) -> Option<Facet> {
        match self.claim {
            Claim::Unclaimed => None,
            Claim::ClaimedBy(facet) => Some(facet),
        }
    }
}

/// Split a query into normalized words.
///
/// In order: `'`, `,` and `;` become spaces, the text is normalized by the
/// dictionary, split on whitespace, and `<number>%` is split into `<number>` `%`.
pub fn tokenize(dictionary: &dyn Dictionary, query: &str) -> Vec<String> {
    let cleaned: String = query
        .chars()
        .map(|c| if matches!(c, '\'' | ',' | ';') { ' ' } else { c })
        .collect();
    let normalized = dictionary.normalize(&cleaned);

    let mut words = Vec::new();
    for term in normalized.split_whitespace() {
        match split_percent(term) {
            Some(number) => {
                words.push(number.to_string());
                words.push("%".to_string());
            }
            None => words.push(term.to_string()),
        }
    }
    words
}

fn split_percent(term: &str) -> Option<&str> {
    let number = term.strip_suffix('%')?;
    let numeric = !number.is_empty()
        && number
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        && number.parse::<f64>().is_ok();
    numeric.then_some(number)
}

/// Words of one query plus the errors recorded against them
#[derive(Debug, Clone, Default)]
pub struct WordStream {
    words: Vec<Word>,
    errors: Vec<AnalysisError>,
}

impl WordStream {
    /// Tokenize `query` with the dictionary's normalization.
    pub fn new(dictionary: &dyn Dictionary, query: &str) -> Self {
        Self::from_words(tokenize(dictionary, query))
    }

    /// Build a stream from already normalized words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(position, text)| Word {
                text: text.into(),
                position,
                claim: Claim::Unclaimed,
            })
            .collect();
        Self {
            words,
            errors: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if `position` exists and is not yet consumed.
    pub fn is_valid_position(&self, position: usize) -> bool {
        self.words
            .get(position)
            .map(|w| !w.consumed())
            .unwrap_or(false)
    }

    pub fn word_at(&self, position: usize) -> Option<&Word> {
        self.words.get(position)
    }

    /// Text at `position`, only if the position is still valid.
    pub fn available(&self, position: usize) -> Option<&str> {
        self.words
            .get(position)
            .filter(|w| !w.consumed())
            .map(|w| w.text.as_str())
    }

    /// Text at `position` whether consumed or not.
    pub fn text_at(&self, position: usize) -> Option<&str> {
        self.words.get(position).map(|w| w.text.as_str())
    }

    /// Claim one word. Returns false if it was already claimed or out of range.
    pub fn try_consume(&mut self, position: usize, facet: Facet) -> bool {
        match self.words.get_mut(position) {
            Some(word) if !word.consumed() => {
                word.claim = Claim::ClaimedBy(facet);
                true
            }
            _ => false,
        }
    }

    /// Claim every word in `span`, or none of them.
    pub fn consume_span(&mut self, span: Range<usize>, facet: Facet) -> bool {
        if span.is_empty() || !span.clone().all(|p| self.is_valid_position(p)) {
            trace!(?span, %facet, "span not available");
            return false;
        }
        for position in span {
            self.words[position].claim = Claim::ClaimedBy(facet);
        }
        true
    }

    /// Valid words in `span` joined with single spaces.
    pub fn phrase(&self, span: Range<usize>) -> Option<String> {
        if span.is_empty() {
            return None;
        }
        let mut parts = Vec::with_capacity(span.len());
        for position in span {
            parts.push(self.available(position)?);
        }
        Some(parts.join(" "))
    }

    /// Longest phrase starting at `start` (at most `max_words` long) accepted by `lookup`.
    ///
    /// Returns the lookup result and the phrase length in words.
    pub fn longest_match<T>(
        &self,
        start: usize,
        max_words: usize,
        mut lookup: impl FnMut(&str) -> Option<T>,
    ) -> Option<(T, usize)> {
        let max_words = max_words.min(self.len().saturating_sub(start));
        for len in (1..=max_words).rev() {
            if let Some(phrase) = self.phrase(start..start + len) {
                if let Some(found) = lookup(&phrase) {
                    return Some((found, len));
                }
            }
        }
        None
    }

    /// Longest phrase ending just before `end` accepted by `lookup`.
    ///
    /// Returns the lookup result and the phrase start position.
    pub fn longest_match_before<T>(
        &self,
        end: usize,
        max_words: usize,
        mut lookup: impl FnMut(&str) -> Option<T>,
    ) -> Option<(T, usize)> {
        for len in (1..=max_words.min(end)).rev() {
            let start = end - len;
            if let Some(phrase) = self.phrase(start..end) {
                if let Some(found) = lookup(&phrase) {
                    return Some((found, start));
                }
            }
        }
        None
    }

    pub fn record_error(&mut self, code: ErrorCode, context: impl Into<String>, position: usize) {
        let error = AnalysisError::new(code, context, position);
        debug!(%error, "analysis error");
        self.errors.push(error);
    }

    /// Record why the modifier at `position` matched nothing.
    ///
    /// `MISSING_ARGUMENT` if the following word is absent or already claimed,
    /// `NOT_UNDERSTOOD` otherwise.
    pub fn reject_modifier(&mut self, position: usize) {
        let context = self.text_at(position).unwrap_or_default().to_string();
        let code = if self.is_valid_position(position + 1) {
            ErrorCode::NotUnderstood
        } else {
            ErrorCode::MissingArgument
        };
        self.record_error(code, context, position);
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn errors(&self) -> &[AnalysisError] {
        &self.errors
    }

    /// Words not claimed by any processor.
    pub fn unconsumed(&self) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(|w| !w.consumed())
    }

    pub fn into_parts(self) -> (Vec<Word>, Vec<AnalysisError>) {
        (self.words, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryDictionary;

    fn words(query: &str) -> Vec<String> {
        tokenize(&MemoryDictionary::new("en"), query)
    }

    #[test]
    fn test_tokenize_normalizes() {
        assert_eq!(words("Forêt  SPOT5"), vec!["foret", "spot5"]);
    }

    #[test]
    fn test_tokenize_separators() {
        assert_eq!(
            words("l'été,forest;urban"),
            vec!["l", "ete", "forest", "urban"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(words("").is_empty());
        assert!(words(" , ;  ").is_empty());
    }

    #[test]
    fn test_tokenize_splits_percent() {
        assert_eq!(words("50%"), vec!["50", "%"]);
        assert_eq!(words("12.5% clouds"), vec!["12.5", "%", "clouds"]);
    }

    #[test]
    fn test_tokenize_keeps_spaced_percent() {
        assert_eq!(words("50 % humidity"), vec!["50", "%", "humidity"]);
    }

    #[test]
    fn test_tokenize_non_numeric_percent() {
        assert_eq!(words("abc%"), vec!["abc%"]);
        assert_eq!(words("%"), vec!["%"]);
    }

    #[test]
    fn test_positions_are_stable() {
        let stream = WordStream::from_words(["a", "b", "c"]);
        let positions: Vec<_> = stream.words().iter().map(|w| w.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_try_consume_is_exclusive() {
        let mut stream = WordStream::from_words(["forest", "2012"]);
        assert!(stream.try_consume(0, Facet::What));
        assert!(!stream.try_consume(0, Facet::When));
        assert_eq!(stream.word_at(0).unwrap().facet(), Some(Facet::What));
        assert!(!stream.try_consume(5, Facet::What));
    }

    #[test]
    fn test_consume_span_all_or_nothing() {
        let mut stream = WordStream::from_words(["a", "b", "c"]);
        assert!(stream.try_consume(1, Facet::Where));
        assert!(!stream.consume_span(0..3, Facet::When));
        assert!(stream.is_valid_position(0));
        assert!(stream.is_valid_position(2));
        assert!(!stream.consume_span(2..4, Facet::When));
        assert!(!stream.consume_span(0..0, Facet::When));
    }

    #[test]
    fn test_phrase_requires_available_words() {
        let mut stream = WordStream::from_words(["cloud", "cover", "lesser"]);
        assert_eq!(stream.phrase(0..2).as_deref(), Some("cloud cover"));
        stream.try_consume(1, Facet::What);
        assert_eq!(stream.phrase(0..2), None);
        assert_eq!(stream.phrase(0..1).as_deref(), Some("cloud"));
    }

    #[test]
    fn test_longest_match_prefers_longer() {
        let stream = WordStream::from_words(["new", "york", "city"]);
        let found = stream.longest_match(0, 3, |p| (p == "new" || p == "new york").then(|| p.to_string()));
        assert_eq!(found, Some(("new york".to_string(), 2)));
    }

    #[test]
    fn test_longest_match_limit_beyond_stream() {
        let stream = WordStream::from_words(["with", "forest"]);
        let mut tried = Vec::new();
        let found = stream.longest_match(1, usize::MAX, |p| {
            tried.push(p.to_string());
            (p == "forest").then_some(())
        });
        assert_eq!(found, Some(((), 1)));
        assert_eq!(tried, vec!["forest"]);
        assert_eq!(stream.longest_match(5, usize::MAX, |_| Some(())), None);
    }

    #[test]
    fn test_longest_match_before() {
        let stream = WordStream::from_words(["the", "cloud", "cover", "lesser"]);
        let found = stream.longest_match_before(3, 3, |p| (p == "cloud cover").then_some(()));
        assert_eq!(found, Some(((), 1)));
        assert_eq!(stream.longest_match_before(0, 3, |_| Some(())), None);
    }

    #[test]
    fn test_reject_modifier() {
        let mut stream = WordStream::from_words(["after", "soon", "before"]);
        stream.reject_modifier(0);
        stream.reject_modifier(2);
        let codes: Vec<_> = stream.errors().iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![ErrorCode::NotUnderstood, ErrorCode::MissingArgument]);
        assert_eq!(stream.errors()[1].context, "before");
    }

    #[test]
    fn test_unconsumed() {
        let mut stream = WordStream::from_words(["images", "with", "forest"]);
        stream.consume_span(1..3, Facet::What);
        let left: Vec<_> = stream.unconsumed().map(|w| w.text.as_str()).collect();
        assert_eq!(left, vec!["images"]);
    }
}
