//! Keyword and quantity extraction
//!
//! ```text
//! with     ::= WITH (quantity | keyword)
//! without  ::= WITHOUT (quantity | keyword)
//! compare  ::= quantity (LESSER | GREATER | EQUAL) [THAN] number unit
//!            | (LESSER | GREATER | EQUAL) [THAN] number unit [OF] quantity
//! ```
//!
//! `WITH quantity` means `quantity > 0`, `WITHOUT quantity` means `quantity = 0`.

use std::ops::Range;
use tracing::debug;

use super::config::AnalyzerConfig;
use super::errors::ErrorCode;
use super::processor::Processor;
use super::result::{Comparator, WhatFacet};
use super::words::{Facet, WordStream};
use crate::dictionary::{Dictionary, DictionaryExt, Keyword, QuantityModifier};

/// Extracts [`WhatFacet`]s
pub struct WhatProcessor<'a> {
    dictionary: &'a dyn Dictionary,
    config: &'a AnalyzerConfig,
    result: Vec<WhatFacet>,
}

impl<'a> WhatProcessor<'a> {
    pub fn new(dictionary: &'a dyn Dictionary, config: &'a AnalyzerConfig) -> Self {
        Self {
            dictionary,
            config,
            result: Vec::new(),
        }
    }

    pub fn result(&self) -> &[WhatFacet] {
        &self.result
    }

    pub fn into_result(self) -> Vec<WhatFacet> {
        self.result
    }

    fn emit(&mut self, stream: &mut WordStream, span: Range<usize>, facet: WhatFacet) {
        if stream.consume_span(span.clone(), Self::FACET) {
            debug!(?span, %facet, "what facet");
            self.result.push(facet);
        }
    }

    fn modifier_at(&self, stream: &WordStream, position: usize) -> Option<QuantityModifier> {
        stream
            .available(position)
            .and_then(|w| self.dictionary.quantity_modifier(w))
    }

    fn quantity_at(&self, stream: &WordStream, position: usize) -> Option<(String, usize)> {
        stream.longest_match(position, self.config.max_phrase_words, |p| {
            self.dictionary.quantity(p)
        })
    }

    fn keyword_at(&self, stream: &WordStream, position: usize) -> Option<(Keyword, usize)> {
        stream.longest_match(position, self.config.max_phrase_words, |p| {
            self.dictionary.keyword(p)
        })
    }

    /// `WITH`/`WITHOUT` followed by a quantity or a keyword
    fn process_with(&mut self, stream: &mut WordStream, position: usize, excluded: bool) {
        let at = position + 1;
        if !stream.is_valid_position(at) {
            stream.reject_modifier(position);
            return;
        }

        if let Some((quantity, len)) = self.quantity_at(stream, at) {
            let comparator = if excluded {
                Comparator::Eq
            } else {
                Comparator::Gt
            };
            let facet = WhatFacet::Quantity {
                quantity,
                comparator,
                value: 0.0,
                unit: None,
            };
            self.emit(stream, position..at + len, facet);
            return;
        }

        if let Some((keyword, len)) = self.keyword_at(stream, at) {
            let facet = WhatFacet::Keyword {
                kind: keyword.kind,
                value: keyword.value,
                excluded,
            };
            self.emit(stream, position..at + len, facet);
            return;
        }

        stream.reject_modifier(position);
    }

    /// `LESSER`/`GREATER`/`EQUAL` in either word order
    fn process_comparison(
        &mut self,
        stream: &mut WordStream,
        position: usize,
        comparator: Comparator,
    ) {
        let modifier = stream.text_at(position).unwrap_or_default().to_string();

        let mut at = position + 1;
        if self.modifier_at(stream, at) == Some(QuantityModifier::Than) {
            at += 1;
        }

        let value = match stream.available(at).map(str::to_string) {
            None => {
                stream.record_error(ErrorCode::MissingArgument, modifier, position);
                return;
            }
            Some(word) => match self.dictionary.number(&word) {
                Some(value) => value,
                None => {
                    stream.record_error(ErrorCode::NotUnderstood, word, at);
                    return;
                }
            },
        };

        let unit_position = at + 1;
        let unit = match stream.available(unit_position).map(str::to_string) {
            None => {
                let number = stream.text_at(at).unwrap_or_default().to_string();
                stream.record_error(ErrorCode::MissingUnit, number, at);
                return;
            }
            Some(word) => match self.dictionary.unit(&word) {
                Some(unit) => unit,
                None => {
                    let missing = self.modifier_at(stream, unit_position)
                        == Some(QuantityModifier::Of)
                        || self.quantity_at(stream, unit_position).is_some();
                    let code = if missing {
                        ErrorCode::MissingUnit
                    } else {
                        ErrorCode::InvalidUnit
                    };
                    stream.record_error(code, word, unit_position);
                    return;
                }
            },
        };

        // quantity before the modifier
        let before = stream.longest_match_before(position, self.config.max_phrase_words, |p| {
            self.dictionary.quantity(p)
        });
        if let Some((quantity, start)) = before {
            let facet = WhatFacet::Quantity {
                quantity,
                comparator,
                value,
                unit: Some(unit),
            };
            self.emit(stream, start..unit_position + 1, facet);
            return;
        }

        // quantity after the unit
        let mut after = unit_position + 1;
        if self.modifier_at(stream, after) == Some(QuantityModifier::Of) {
            after += 1;
        }
        if let Some((quantity, len)) = self.quantity_at(stream, after) {
            let facet = WhatFacet::Quantity {
                quantity,
                comparator,
                value,
                unit: Some(unit),
            };
            self.emit(stream, position..after + len, facet);
            return;
        }

        stream.record_error(ErrorCode::NotUnderstood, modifier, position);
    }

    /// `type=value` written out by the user
    fn process_explicit(&mut self, stream: &mut WordStream, position: usize) -> bool {
        let facet = match stream.available(position).and_then(|w| w.split_once('=')) {
            Some((kind, value)) if !kind.is_empty() && !value.is_empty() => WhatFacet::Keyword {
                kind: kind.to_string(),
                value: value.to_string(),
                excluded: false,
            },
            _ => return false,
        };
        self.emit(stream, position..position + 1, facet);
        true
    }
}

impl Processor for WhatProcessor<'_> {
    type Modifier = QuantityModifier;

    const FACET: Facet = Facet::What;

    fn modifier(&self, word: &str) -> Option<QuantityModifier> {
        self.dictionary.quantity_modifier(word)
    }

    fn process_modifier(
        &mut self,
        stream: &mut WordStream,
        modifier: QuantityModifier,
        position: usize,
    ) {
        match modifier {
            QuantityModifier::With => self.process_with(stream, position, false),
            QuantityModifier::Without => self.process_with(stream, position, true),
            QuantityModifier::Lesser => self.process_comparison(stream, position, Comparator::Lt),
            QuantityModifier::Greater => self.process_comparison(stream, position, Comparator::Gt),
            QuantityModifier::Equal => self.process_comparison(stream, position, Comparator::Eq),
            QuantityModifier::Than | QuantityModifier::Of => {}
        }
    }

    fn process_word(&mut self, stream: &mut WordStream, position: usize) {
        if self.process_explicit(stream, position) {
            return;
        }
        if let Some((keyword, len)) = self.keyword_at(stream, position) {
            let facet = WhatFacet::Keyword {
                kind: keyword.kind,
                value: keyword.value,
                excluded: false,
            };
            self.emit(stream, position..position + len, facet);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::errors::AnalysisError;
    use crate::analyzer::run_both;
    use crate::dictionary::MemoryDictionary;
    use pretty_assertions::assert_eq;

    fn run(query: &str) -> (Vec<WhatFacet>, WordStream) {
        let dictionary = MemoryDictionary::english();
        let config = AnalyzerConfig::default();
        let mut stream = WordStream::new(&dictionary, query);
        let mut processor = WhatProcessor::new(&dictionary, &config);
        run_both(&mut processor, &mut stream);
        (processor.into_result(), stream)
    }

    fn quantity(name: &str, comparator: Comparator, value: f64, unit: Option<&str>) -> WhatFacet {
        WhatFacet::Quantity {
            quantity: name.to_string(),
            comparator,
            value,
            unit: unit.map(str::to_string),
        }
    }

    fn keyword(kind: &str, value: &str, excluded: bool) -> WhatFacet {
        WhatFacet::Keyword {
            kind: kind.to_string(),
            value: value.to_string(),
            excluded,
        }
    }

    fn codes(stream: &WordStream) -> Vec<ErrorCode> {
        stream.errors().iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_quantity_before_modifier() {
        let (facets, stream) = run("cloud cover lesser than 10 percent");
        assert_eq!(
            facets,
            vec![quantity("cloud cover", Comparator::Lt, 10.0, Some("percent"))]
        );
        assert_eq!(stream.unconsumed().count(), 0);
        assert!(stream.errors().is_empty());
    }

    #[test]
    fn test_quantity_after_unit() {
        let (facets, stream) = run("greater than 20% of cloud cover");
        assert_eq!(
            facets,
            vec![quantity("cloud cover", Comparator::Gt, 20.0, Some("percent"))]
        );
        assert_eq!(stream.unconsumed().count(), 0);
    }

    #[test]
    fn test_equal_to_without_than() {
        let (facets, _) = run("depth equal 5 meters");
        assert_eq!(facets, vec![quantity("depth", Comparator::Eq, 5.0, Some("meter"))]);

        let (facets, _) = run("depth equal to 5 meters");
        assert_eq!(facets, vec![quantity("depth", Comparator::Eq, 5.0, Some("meter"))]);
    }

    #[test]
    fn test_spelled_number() {
        let (facets, _) = run("cloud cover lesser than two percent");
        assert_eq!(
            facets,
            vec![quantity("cloud cover", Comparator::Lt, 2.0, Some("percent"))]
        );
    }

    #[test]
    fn test_with_keyword() {
        let (facets, stream) = run("images with forest");
        assert_eq!(facets, vec![keyword("landuse", "forest", false)]);
        let left: Vec<_> = stream.unconsumed().map(|w| w.text.as_str()).collect();
        assert_eq!(left, vec!["images"]);
    }

    #[test]
    fn test_without_keyword() {
        let (facets, _) = run("without clouds");
        assert_eq!(facets, vec![keyword("keyword", "clouds", true)]);
    }

    #[test]
    fn test_with_quantity_is_greater_than_zero() {
        let (facets, _) = run("with cloud cover");
        assert_eq!(facets, vec![quantity("cloud cover", Comparator::Gt, 0.0, None)]);
    }

    #[test]
    fn test_without_quantity_is_equal_zero() {
        let (facets, _) = run("without snow cover");
        assert_eq!(facets, vec![quantity("snow cover", Comparator::Eq, 0.0, None)]);
    }

    #[test]
    fn test_invalid_unit() {
        let (facets, stream) = run("depth greater than 5 meelers");
        assert!(facets.is_empty());
        assert_eq!(
            stream.errors(),
            &[AnalysisError::new(ErrorCode::InvalidUnit, "meelers", 4)]
        );
        assert_eq!(stream.unconsumed().count(), 5);
    }

    #[test]
    fn test_missing_unit_at_end() {
        let (facets, stream) = run("depth greater than 5");
        assert!(facets.is_empty());
        assert_eq!(codes(&stream), vec![ErrorCode::MissingUnit]);
    }

    #[test]
    fn test_missing_unit_before_quantity() {
        let (facets, stream) = run("greater than 5 of depth");
        assert!(facets.is_empty());
        assert_eq!(codes(&stream), vec![ErrorCode::MissingUnit]);
        assert_eq!(stream.errors()[0].context, "of");
    }

    #[test]
    fn test_non_numeric_value() {
        let (facets, stream) = run("depth greater than many meters");
        assert!(facets.is_empty());
        assert_eq!(
            stream.errors(),
            &[AnalysisError::new(ErrorCode::NotUnderstood, "many", 3)]
        );
    }

    #[test]
    fn test_comparison_without_quantity() {
        let (facets, stream) = run("greater than 5 meters");
        assert!(facets.is_empty());
        assert_eq!(
            stream.errors(),
            &[AnalysisError::new(ErrorCode::NotUnderstood, "greater", 0)]
        );
    }

    #[test]
    fn test_with_at_end() {
        let (facets, stream) = run("images with");
        assert!(facets.is_empty());
        assert_eq!(codes(&stream), vec![ErrorCode::MissingArgument]);
    }

    #[test]
    fn test_with_unknown_word() {
        let (facets, stream) = run("with unicorns");
        assert!(facets.is_empty());
        assert_eq!(codes(&stream), vec![ErrorCode::NotUnderstood]);
    }

    #[test]
    fn test_bare_keywords() {
        let (facets, stream) = run("spot5 images forest");
        assert_eq!(
            facets,
            vec![
                keyword("platform", "SPOT5", false),
                keyword("landuse", "forest", false)
            ]
        );
        assert!(stream.errors().is_empty());
    }

    #[test]
    fn test_multi_word_keyword() {
        let (facets, stream) = run("sentinel 2 images");
        assert_eq!(facets, vec![keyword("platform", "S2", false)]);
        assert_eq!(stream.unconsumed().count(), 1);
    }

    #[test]
    fn test_explicit_key_value() {
        let (facets, _) = run("platform=pleiades images");
        assert_eq!(facets, vec![keyword("platform", "pleiades", false)]);

        let (facets, _) = run("=oops");
        assert!(facets.is_empty());
    }
}
