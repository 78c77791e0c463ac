//! Temporal expression extraction
//!
//! ```text
//! day      ::= TODAY | TOMORROW | YESTERDAY
//! bound    ::= (AFTER | BEFORE) date
//! between  ::= BETWEEN date AND date
//!            | BETWEEN month AND month [year]
//!            | BETWEEN day AND day [month [year]]
//! in       ::= IN (date | season [year] | month)
//! relative ::= (LAST | NEXT) [count] unit | count (LAST | NEXT) unit | unit (LAST | NEXT)
//! since    ::= SINCE (relative-past | date)
//! ago      ::= count unit AGO
//! date     ::= day month year | year month day | month year | year month | year | iso
//! ```
//!
//! Relative expressions are computed against the analysis clock, which the
//! caller fixes so results are reproducible.

use chrono::{DateTime, Datelike, Duration, Utc};
use std::ops::Range;
use tracing::debug;

use super::config::AnalyzerConfig;
use super::errors::ErrorCode;
use super::processor::Processor;
use super::temporal::{months_range, season_range, shift, DateSpec, TimeRange};
use super::words::{Facet, WordStream};
use crate::dictionary::{Dictionary, DictionaryExt, Season, TimeModifier, TimeUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Past,
    Future,
}

/// Extracts [`TimeRange`]s
pub struct WhenProcessor<'a> {
    dictionary: &'a dyn Dictionary,
    config: &'a AnalyzerConfig,
    now: DateTime<Utc>,
    result: Vec<TimeRange>,
}

impl<'a> WhenProcessor<'a> {
    pub fn new(
        dictionary: &'a dyn Dictionary,
        config: &'a AnalyzerConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            dictionary,
            config,
            now,
            result: Vec::new(),
        }
    }

    pub fn result(&self) -> &[TimeRange] {
        &self.result
    }

    pub fn into_result(self) -> Vec<TimeRange> {
        self.result
    }

    /// Claim `span` and record `range`. A range that could not be computed
    /// (calendar overflow) is reported as `NOT_UNDERSTOOD`.
    fn emit(&mut self, stream: &mut WordStream, span: Range<usize>, range: Option<TimeRange>) -> bool {
        let range = match range {
            Some(range) => range,
            None => {
                let context = stream.text_at(span.start).unwrap_or_default().to_string();
                stream.record_error(ErrorCode::NotUnderstood, context, span.start);
                return false;
            }
        };
        if !stream.consume_span(span.clone(), Self::FACET) {
            return false;
        }
        debug!(?span, %range, "when facet");
        self.result.push(range);
        true
    }

    // Readers. Each returns None when the position is out of range or consumed.

    fn modifier_at(&self, stream: &WordStream, position: usize) -> Option<TimeModifier> {
        stream
            .available(position)
            .and_then(|w| self.dictionary.time_modifier(w))
    }

    fn is_modifier(&self, stream: &WordStream, position: usize, modifier: TimeModifier) -> bool {
        self.modifier_at(stream, position) == Some(modifier)
    }

    fn count_at(&self, stream: &WordStream, position: usize) -> Option<u32> {
        let n = self.dictionary.number(stream.available(position)?)?;
        if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
            return None;
        }
        Some(n as u32)
    }

    /// A count written before the words it counts (`2 last years`, `3 days ago`).
    /// Numbers in the year range are left to the date patterns.
    fn count_before(&self, stream: &WordStream, position: usize) -> Option<u32> {
        self.count_at(stream, position)
            .filter(|n| i32::try_from(*n).map_or(true, |year| !self.config.is_year(year)))
    }

    fn unit_at(&self, stream: &WordStream, position: usize) -> Option<TimeUnit> {
        stream
            .available(position)
            .and_then(|w| self.dictionary.time_unit(w))
    }

    fn month_at(&self, stream: &WordStream, position: usize) -> Option<u32> {
        stream
            .available(position)
            .and_then(|w| self.dictionary.month(w))
    }

    fn season_at(&self, stream: &WordStream, position: usize) -> Option<Season> {
        stream
            .available(position)
            .and_then(|w| self.dictionary.season(w))
    }

    fn year_at(&self, stream: &WordStream, position: usize) -> Option<i32> {
        let word = stream.available(position)?;
        if !word.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        word.parse::<i32>().ok().filter(|y| self.config.is_year(*y))
    }

    /// Day of month, `10` or `10th`
    fn day_at(&self, stream: &WordStream, position: usize) -> Option<u32> {
        let word = stream.available(position)?;
        let digits = ["st", "nd", "rd", "th"]
            .iter()
            .find_map(|suffix| word.strip_suffix(suffix))
            .unwrap_or(word);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
    }

    /// A date starting at `position` and its length in words.
    fn date_at(&self, stream: &WordStream, position: usize) -> Option<(DateSpec, usize)> {
        let day_month_year = (
            self.day_at(stream, position),
            self.month_at(stream, position + 1),
            self.year_at(stream, position + 2),
        );
        if let (Some(day), Some(month), Some(year)) = day_month_year {
            if let Some(date) = DateSpec::day(year, month, day) {
                return Some((date, 3));
            }
        }

        let year_month_day = (
            self.year_at(stream, position),
            self.month_at(stream, position + 1),
            self.day_at(stream, position + 2),
        );
        if let (Some(year), Some(month), Some(day)) = year_month_day {
            if let Some(date) = DateSpec::day(year, month, day) {
                return Some((date, 3));
            }
        }

        if let (Some(month), Some(year)) = (
            self.month_at(stream, position),
            self.year_at(stream, position + 1),
        ) {
            if let Some(date) = DateSpec::month(year, month) {
                return Some((date, 2));
            }
        }

        if let (Some(year), Some(month)) = (
            self.year_at(stream, position),
            self.month_at(stream, position + 1),
        ) {
            if let Some(date) = DateSpec::month(year, month) {
                return Some((date, 2));
            }
        }

        if let Some(year) = self.year_at(stream, position) {
            return Some((DateSpec::Year(year), 1));
        }

        let word = stream.available(position)?;
        DateSpec::parse_iso(word).map(|date| (date, 1))
    }

    fn relative(&self, unit: TimeUnit, count: u32, direction: Direction) -> Option<TimeRange> {
        match direction {
            Direction::Past => Some(TimeRange::new(shift(self.now, unit, count, false)?, self.now)),
            Direction::Future => Some(TimeRange::new(self.now, shift(self.now, unit, count, true)?)),
        }
    }

    /// A relative period anchored on the `LAST`/`NEXT` word at `position`.
    ///
    /// Returns the range and the span it covers.
    fn relative_at(
        &self,
        stream: &WordStream,
        position: usize,
        direction: Direction,
    ) -> Option<(Option<TimeRange>, Range<usize>)> {
        // last 2 years
        if let (Some(count), Some(unit)) = (
            self.count_at(stream, position + 1),
            self.unit_at(stream, position + 2),
        ) {
            return Some((self.relative(unit, count, direction), position..position + 3));
        }
        // 2 last years
        if let Some(before) = position.checked_sub(1) {
            if let (Some(count), Some(unit)) = (
                self.count_before(stream, before),
                self.unit_at(stream, position + 1),
            ) {
                return Some((self.relative(unit, count, direction), before..position + 2));
            }
        }
        // last year
        if let Some(unit) = self.unit_at(stream, position + 1) {
            return Some((self.relative(unit, 1, direction), position..position + 2));
        }
        // year last
        if let Some(before) = position.checked_sub(1) {
            if let Some(unit) = self.unit_at(stream, before) {
                return Some((self.relative(unit, 1, direction), before..position + 1));
            }
        }
        None
    }

    fn process_day(&mut self, stream: &mut WordStream, position: usize, offset: i64) {
        let range = Duration::try_days(offset)
            .and_then(|delta| self.now.date_naive().checked_add_signed(delta))
            .map(DateSpec::Day)
            .and_then(TimeRange::of);
        self.emit(stream, position..position + 1, range);
    }

    /// `AFTER date` or `BEFORE date`, both anchored on the date's first instant
    fn process_bound(&mut self, stream: &mut WordStream, position: usize, after: bool) {
        match self.date_at(stream, position + 1) {
            Some((date, len)) => {
                let range = date.start().map(|instant| {
                    if after {
                        TimeRange::since(instant)
                    } else {
                        TimeRange::until(instant)
                    }
                });
                self.emit(stream, position..position + 1 + len, range);
            }
            None => stream.reject_modifier(position),
        }
    }

    fn process_between(&mut self, stream: &mut WordStream, position: usize) {
        let first = position + 1;

        // between 2010 and 10 may 2012
        if let Some((from, from_len)) = self.date_at(stream, first) {
            let and = first + from_len;
            if self.is_modifier(stream, and, TimeModifier::And) {
                if let Some((to, to_len)) = self.date_at(stream, and + 1) {
                    let range = from
                        .start()
                        .zip(to.end())
                        .map(|(start, end)| TimeRange::new(start, end));
                    self.emit(stream, position..and + 1 + to_len, range);
                    return;
                }
            }
        }

        // between march and may [2012]
        if let (Some(from), true, Some(to)) = (
            self.month_at(stream, first),
            self.is_modifier(stream, first + 1, TimeModifier::And),
            self.month_at(stream, first + 2),
        ) {
            let (year, end) = match self.year_at(stream, first + 3) {
                Some(year) => (year, first + 4),
                None => (self.now.year(), first + 3),
            };
            self.emit(stream, position..end, months_range(year, from, to));
            return;
        }

        // between 10 and 20 [may [2012]]
        if let (Some(from), true, Some(to)) = (
            self.day_at(stream, first),
            self.is_modifier(stream, first + 1, TimeModifier::And),
            self.day_at(stream, first + 2),
        ) {
            let mut end = first + 3;
            let mut month = self.now.month();
            let mut year = self.now.year();
            if let Some(m) = self.month_at(stream, end) {
                month = m;
                end += 1;
                if let Some(y) = self.year_at(stream, end) {
                    year = y;
                    end += 1;
                }
            }
            let range = DateSpec::day(year, month, from)
                .zip(DateSpec::day(year, month, to))
                .and_then(|(from, to)| Some(TimeRange::new(from.start()?, to.end()?)));
            self.emit(stream, position..end, range);
            return;
        }

        stream.reject_modifier(position);
    }

    /// `IN` patterns; `offset` is 1 when anchored on the modifier, 0 for a bare date.
    fn process_in(&mut self, stream: &mut WordStream, position: usize, offset: usize) -> bool {
        let at = position + offset;

        if let Some((date, len)) = self.date_at(stream, at) {
            return self.emit(stream, position..at + len, TimeRange::of(date));
        }

        if let Some(season) = self.season_at(stream, at) {
            let (year, len) = match self.year_at(stream, at + 1) {
                Some(year) => (year, 2),
                None => (self.now.year(), 1),
            };
            return self.emit(stream, position..at + len, season_range(season, year));
        }

        if let Some(month) = self.month_at(stream, at) {
            return self.emit(stream, position..at + 1, months_range(self.now.year(), month, month));
        }

        false
    }

    fn process_relative(&mut self, stream: &mut WordStream, position: usize, direction: Direction) {
        match self.relative_at(stream, position, direction) {
            Some((range, span)) => {
                self.emit(stream, span, range);
            }
            None => stream.reject_modifier(position),
        }
    }

    fn process_since(&mut self, stream: &mut WordStream, position: usize) {
        let next = position + 1;

        // since 2 years
        if let (Some(count), Some(unit)) = (self.count_at(stream, next), self.unit_at(stream, next + 1)) {
            let range = shift(self.now, unit, count, false).map(TimeRange::since);
            self.emit(stream, position..next + 2, range);
            return;
        }

        // since 2 last years, since last 2 years, since last year, since year last
        let anchor = if self.is_modifier(stream, next, TimeModifier::Last) {
            Some(next)
        } else if self.is_modifier(stream, next + 1, TimeModifier::Last) {
            Some(next + 1)
        } else {
            None
        };
        if let Some(anchor) = anchor {
            if let Some((range, span)) = self.relative_at(stream, anchor, Direction::Past) {
                if span.start == next {
                    let range = range.and_then(|r| r.start).map(TimeRange::since);
                    self.emit(stream, position..span.end, range);
                    return;
                }
            }
        }

        // since 10 may 2012
        if let Some((date, len)) = self.date_at(stream, next) {
            let range = date.start().map(TimeRange::since);
            self.emit(stream, position..next + len, range);
            return;
        }

        stream.reject_modifier(position);
    }

    /// `count unit AGO`, a point in the past
    fn process_ago(&mut self, stream: &mut WordStream, position: usize) {
        let unit = position.checked_sub(1).and_then(|p| self.unit_at(stream, p));
        let count = position.checked_sub(2).and_then(|p| self.count_before(stream, p));
        match (count, unit) {
            (Some(count), Some(unit)) => {
                let range = shift(self.now, unit, count, false).map(TimeRange::point);
                self.emit(stream, position - 2..position + 1, range);
            }
            _ => {
                let context = stream.text_at(position).unwrap_or_default().to_string();
                let code = match position.checked_sub(1) {
                    Some(before) if stream.is_valid_position(before) => ErrorCode::NotUnderstood,
                    _ => ErrorCode::MissingArgument,
                };
                stream.record_error(code, context, position);
            }
        }
    }
}

impl Processor for WhenProcessor<'_> {
    type Modifier = TimeModifier;

    const FACET: Facet = Facet::When;

    fn modifier(&self, word: &str) -> Option<TimeModifier> {
        self.dictionary.time_modifier(word)
    }

    fn process_modifier(&mut self, stream: &mut WordStream, modifier: TimeModifier, position: usize) {
        match modifier {
            TimeModifier::Today => self.process_day(stream, position, 0),
            TimeModifier::Tomorrow => self.process_day(stream, position, 1),
            TimeModifier::Yesterday => self.process_day(stream, position, -1),
            TimeModifier::After => self.process_bound(stream, position, true),
            TimeModifier::Before => self.process_bound(stream, position, false),
            TimeModifier::Between => self.process_between(stream, position),
            TimeModifier::In => {
                // IN is shared with the location vocabulary; a miss is not an error here
                self.process_in(stream, position, 1);
            }
            TimeModifier::Last => self.process_relative(stream, position, Direction::Past),
            TimeModifier::Next => self.process_relative(stream, position, Direction::Future),
            TimeModifier::Since => self.process_since(stream, position),
            TimeModifier::Ago => self.process_ago(stream, position),
            TimeModifier::And => {}
        }
    }

    fn process_word(&mut self, stream: &mut WordStream, position: usize) {
        self.process_in(stream, position, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::errors::AnalysisError;
    use crate::analyzer::run_both;
    use crate::dictionary::MemoryDictionary;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn now() -> DateTime<Utc> {
        utc(2014, 6, 15, 10, 30, 0)
    }

    fn run(query: &str) -> (Vec<TimeRange>, WordStream) {
        let dictionary = MemoryDictionary::english();
        let config = AnalyzerConfig::default();
        let mut stream = WordStream::new(&dictionary, query);
        let mut processor = WhenProcessor::new(&dictionary, &config, now());
        run_both(&mut processor, &mut stream);
        (processor.into_result(), stream)
    }

    fn single(query: &str) -> TimeRange {
        let (ranges, stream) = run(query);
        assert!(stream.errors().is_empty(), "{:?}", stream.errors());
        assert_eq!(ranges.len(), 1, "{query}: {ranges:?}");
        ranges[0]
    }

    #[test]
    fn test_today_tomorrow_yesterday() {
        assert_eq!(
            single("today"),
            TimeRange::new(utc(2014, 6, 15, 0, 0, 0), utc(2014, 6, 15, 23, 59, 59))
        );
        assert_eq!(single("tomorrow").start, Some(utc(2014, 6, 16, 0, 0, 0)));
        assert_eq!(single("yesterday").end, Some(utc(2014, 6, 14, 23, 59, 59)));
    }

    #[test]
    fn test_after_and_before() {
        assert_eq!(single("after 2012"), TimeRange::since(utc(2012, 1, 1, 0, 0, 0)));
        assert_eq!(
            single("before may 2012"),
            TimeRange::until(utc(2012, 5, 1, 0, 0, 0))
        );
        assert_eq!(
            single("after 10 may 2012"),
            TimeRange::since(utc(2012, 5, 10, 0, 0, 0))
        );
        assert_eq!(
            single("before 2012-05-10"),
            TimeRange::until(utc(2012, 5, 10, 0, 0, 0))
        );
    }

    #[test]
    fn test_after_without_date() {
        let (ranges, stream) = run("after lunch");
        assert!(ranges.is_empty());
        assert_eq!(
            stream.errors(),
            &[AnalysisError::new(ErrorCode::NotUnderstood, "after", 0)]
        );

        let (_, stream) = run("images before");
        assert_eq!(stream.errors()[0].code, ErrorCode::MissingArgument);
    }

    #[test]
    fn test_between_dates() {
        assert_eq!(
            single("between 2010 and 10 may 2012"),
            TimeRange::new(utc(2010, 1, 1, 0, 0, 0), utc(2012, 5, 10, 23, 59, 59))
        );
    }

    #[test]
    fn test_between_months() {
        assert_eq!(
            single("between march and may 2012"),
            TimeRange::new(utc(2012, 3, 1, 0, 0, 0), utc(2012, 5, 31, 23, 59, 59))
        );
        assert_eq!(
            single("between march and may"),
            TimeRange::new(utc(2014, 3, 1, 0, 0, 0), utc(2014, 5, 31, 23, 59, 59))
        );
    }

    #[test]
    fn test_between_months_wraps_year() {
        assert_eq!(
            single("between november and february 2012"),
            TimeRange::new(utc(2012, 11, 1, 0, 0, 0), utc(2013, 2, 28, 23, 59, 59))
        );
    }

    #[test]
    fn test_between_days() {
        assert_eq!(
            single("between 10 and 20 may 2012"),
            TimeRange::new(utc(2012, 5, 10, 0, 0, 0), utc(2012, 5, 20, 23, 59, 59))
        );
        assert_eq!(
            single("between 1st and 3rd"),
            TimeRange::new(utc(2014, 6, 1, 0, 0, 0), utc(2014, 6, 3, 23, 59, 59))
        );
    }

    #[test]
    fn test_between_not_understood() {
        let (ranges, stream) = run("between friends");
        assert!(ranges.is_empty());
        assert_eq!(stream.errors()[0].code, ErrorCode::NotUnderstood);
    }

    #[test]
    fn test_in_year_month_season() {
        assert_eq!(
            single("in 2012"),
            TimeRange::new(utc(2012, 1, 1, 0, 0, 0), utc(2012, 12, 31, 23, 59, 59))
        );
        assert_eq!(
            single("in may"),
            TimeRange::new(utc(2014, 5, 1, 0, 0, 0), utc(2014, 5, 31, 23, 59, 59))
        );
        assert_eq!(
            single("in summer 2012"),
            TimeRange::new(utc(2012, 6, 21, 0, 0, 0), utc(2012, 9, 20, 23, 59, 59))
        );
        assert_eq!(single("during winter").end, Some(utc(2015, 3, 20, 23, 59, 59)));
    }

    #[test]
    fn test_in_year_first_dates() {
        assert_eq!(
            single("in 2012 may"),
            TimeRange::new(utc(2012, 5, 1, 0, 0, 0), utc(2012, 5, 31, 23, 59, 59))
        );
        assert_eq!(
            single("in 2012 may 10"),
            TimeRange::new(utc(2012, 5, 10, 0, 0, 0), utc(2012, 5, 10, 23, 59, 59))
        );
    }

    #[test]
    fn test_between_months_with_to() {
        assert_eq!(
            single("between may to june 2012"),
            TimeRange::new(utc(2012, 5, 1, 0, 0, 0), utc(2012, 6, 30, 23, 59, 59))
        );
    }

    #[test]
    fn test_in_non_date_is_silent() {
        let (ranges, stream) = run("in france");
        assert!(ranges.is_empty());
        assert!(stream.errors().is_empty());
        assert_eq!(stream.unconsumed().count(), 2);
    }

    #[test]
    fn test_last_and_next() {
        assert_eq!(
            single("last 2 years"),
            TimeRange::new(utc(2012, 6, 15, 10, 30, 0), now())
        );
        assert_eq!(
            single("2 last years"),
            TimeRange::new(utc(2012, 6, 15, 10, 30, 0), now())
        );
        assert_eq!(
            single("last month"),
            TimeRange::new(utc(2014, 5, 15, 10, 30, 0), now())
        );
        assert_eq!(
            single("next three weeks"),
            TimeRange::new(now(), utc(2014, 7, 6, 10, 30, 0))
        );
        assert_eq!(
            single("year past"),
            TimeRange::new(utc(2013, 6, 15, 10, 30, 0), now())
        );
    }

    #[test]
    fn test_unit_before_next() {
        assert_eq!(
            single("year next"),
            TimeRange::new(now(), utc(2015, 6, 15, 10, 30, 0))
        );
    }

    #[test]
    fn test_year_before_last_is_not_a_count() {
        let (ranges, stream) = run("spot5 2012 last year");
        assert!(stream.errors().is_empty(), "{:?}", stream.errors());
        assert_eq!(
            ranges,
            vec![
                TimeRange::new(utc(2013, 6, 15, 10, 30, 0), now()),
                TimeRange::new(utc(2012, 1, 1, 0, 0, 0), utc(2012, 12, 31, 23, 59, 59)),
            ]
        );

        let (ranges, _) = run("since 2012 last year");
        assert_eq!(
            ranges,
            vec![
                TimeRange::since(utc(2012, 1, 1, 0, 0, 0)),
                TimeRange::new(utc(2013, 6, 15, 10, 30, 0), now()),
            ]
        );
    }

    #[test]
    fn test_last_without_unit() {
        let (ranges, stream) = run("last");
        assert!(ranges.is_empty());
        assert_eq!(stream.errors()[0].code, ErrorCode::MissingArgument);
    }

    #[test]
    fn test_since() {
        let two_years = TimeRange::since(utc(2012, 6, 15, 10, 30, 0));
        assert_eq!(single("since 2 years"), two_years);
        assert_eq!(single("since 2 last years"), two_years);
        assert_eq!(single("since last 2 years"), two_years);
        assert_eq!(
            single("since last year"),
            TimeRange::since(utc(2013, 6, 15, 10, 30, 0))
        );
        assert_eq!(
            single("since year last"),
            TimeRange::since(utc(2013, 6, 15, 10, 30, 0))
        );
        assert_eq!(single("since 2012"), TimeRange::since(utc(2012, 1, 1, 0, 0, 0)));
        assert_eq!(
            single("since may 2012"),
            TimeRange::since(utc(2012, 5, 1, 0, 0, 0))
        );
    }

    #[test]
    fn test_ago_is_a_point() {
        assert_eq!(
            single("3 days ago"),
            TimeRange::point(utc(2014, 6, 12, 10, 30, 0))
        );
        assert_eq!(
            single("2 years ago"),
            TimeRange::point(utc(2012, 6, 15, 10, 30, 0))
        );

        let (ranges, stream) = run("ago");
        assert!(ranges.is_empty());
        assert_eq!(stream.errors()[0].code, ErrorCode::MissingArgument);
    }

    #[test]
    fn test_bare_dates_in_word_pass() {
        let (ranges, stream) = run("forest 2012 images");
        assert_eq!(
            ranges,
            vec![TimeRange::new(utc(2012, 1, 1, 0, 0, 0), utc(2012, 12, 31, 23, 59, 59))]
        );
        assert!(stream.errors().is_empty());
        assert_eq!(stream.unconsumed().count(), 2);
    }

    #[test]
    fn test_out_of_range_numbers_are_not_years() {
        let (ranges, _) = run("in 50");
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_invalid_calendar_date_falls_back() {
        // 31 february is not a date, february 2012 is
        let (ranges, stream) = run("in 31 february 2012");
        assert_eq!(
            ranges,
            vec![TimeRange::new(utc(2012, 2, 1, 0, 0, 0), utc(2012, 2, 29, 23, 59, 59))]
        );
        let left: Vec<_> = stream.unconsumed().map(|w| w.text.as_str()).collect();
        assert_eq!(left, vec!["in", "31"]);
    }
}
