//! Date values and calendar arithmetic for the when processor

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dictionary::{Season, TimeUnit};

/// A time interval; `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Open-ended range starting at `start`
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Open-ended range ending at `end`
    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Zero-length range
    pub fn point(instant: DateTime<Utc>) -> Self {
        Self::new(instant, instant)
    }

    /// Range covering the whole granularity of `date`
    pub fn of(date: DateSpec) -> Option<Self> {
        Some(Self::new(date.start()?, date.end()?))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| s <= instant) && self.end.map_or(true, |e| instant <= e)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(s), Some(e)) => write!(f, "[{}, {}]", s.to_rfc3339(), e.to_rfc3339()),
            (Some(s), None) => write!(f, "[{}, ..)", s.to_rfc3339()),
            (None, Some(e)) => write!(f, "(.., {}]", e.to_rfc3339()),
            (None, None) => write!(f, "(..)"),
        }
    }
}

/// A date as written in the query, keeping its granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    Year(i32),
    Month(i32, u32),
    Day(NaiveDate),
    Instant(DateTime<Utc>),
}

impl DateSpec {
    /// Validated month constructor
    pub fn month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| DateSpec::Month(year, month))
    }

    /// Validated day constructor
    pub fn day(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateSpec::Day)
    }

    /// First instant covered
    pub fn start(&self) -> Option<DateTime<Utc>> {
        match *self {
            DateSpec::Year(y) => day_start(NaiveDate::from_ymd_opt(y, 1, 1)?),
            DateSpec::Month(y, m) => day_start(NaiveDate::from_ymd_opt(y, m, 1)?),
            DateSpec::Day(d) => day_start(d),
            DateSpec::Instant(t) => Some(t),
        }
    }

    /// Last second covered
    pub fn end(&self) -> Option<DateTime<Utc>> {
        match *self {
            DateSpec::Year(y) => day_end(NaiveDate::from_ymd_opt(y, 12, 31)?),
            DateSpec::Month(y, m) => day_end(last_day_of_month(y, m)?),
            DateSpec::Day(d) => day_end(d),
            DateSpec::Instant(t) => Some(t),
        }
    }

    /// Parse the ISO-8601 forms `YYYY-MM`, `YYYY-MM-DD` and full RFC 3339.
    ///
    /// Bare years are left to the caller, which knows the accepted year range.
    pub fn parse_iso(text: &str) -> Option<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Some(DateSpec::Day(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d") {
            return Some(DateSpec::Month(date.year(), date.month()));
        }
        DateTime::parse_from_rfc3339(&text.to_ascii_uppercase())
            .ok()
            .map(|t| DateSpec::Instant(t.with_timezone(&Utc)))
    }
}

pub fn day_start(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|t| t.and_utc())
}

pub fn day_end(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 59).map(|t| t.and_utc())
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Move `from` by `count` calendar units, forward or backward.
///
/// Month arithmetic clamps to the end of shorter months (Mar 31 - 1 month = Feb 28/29).
pub fn shift(
    from: DateTime<Utc>,
    unit: TimeUnit,
    count: u32,
    forward: bool,
) -> Option<DateTime<Utc>> {
    match unit {
        TimeUnit::Year | TimeUnit::Month => {
            let months = if unit == TimeUnit::Year {
                count.checked_mul(12)?
            } else {
                count
            };
            if forward {
                from.checked_add_months(Months::new(months))
            } else {
                from.checked_sub_months(Months::new(months))
            }
        }
        TimeUnit::Week | TimeUnit::Day => {
            let days = i64::from(count) * if unit == TimeUnit::Week { 7 } else { 1 };
            let delta = Duration::try_days(days)?;
            if forward {
                from.checked_add_signed(delta)
            } else {
                from.checked_sub_signed(delta)
            }
        }
    }
}

/// Whole months `first..=last` of `year`; wraps into the next year when `last < first`.
pub fn months_range(year: i32, first: u32, last: u32) -> Option<TimeRange> {
    let end_year = if last < first { year + 1 } else { year };
    Some(TimeRange::new(
        DateSpec::month(year, first)?.start()?,
        DateSpec::month(end_year, last)?.end()?,
    ))
}

/// `season` starting in `year` (winter ends the following March)
pub fn season_range(season: Season, year: i32) -> Option<TimeRange> {
    let (start_month, start_day) = season.start();
    let (end_month, end_day) = season.end();
    let end_year = if season.spans_new_year() { year + 1 } else { year };
    Some(TimeRange::new(
        day_start(NaiveDate::from_ymd_opt(year, start_month, start_day)?)?,
        day_end(NaiveDate::from_ymd_opt(end_year, end_month, end_day)?)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_year_bounds() {
        let year = DateSpec::Year(2012);
        assert_eq!(year.start(), Some(utc(2012, 1, 1, 0, 0, 0)));
        assert_eq!(year.end(), Some(utc(2012, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn test_month_end_is_inclusive() {
        assert_eq!(
            DateSpec::Month(2012, 2).end(),
            Some(utc(2012, 2, 29, 23, 59, 59))
        );
        assert_eq!(
            DateSpec::Month(2013, 12).end(),
            Some(utc(2013, 12, 31, 23, 59, 59))
        );
    }

    #[test]
    fn test_validated_constructors() {
        assert!(DateSpec::month(2012, 13).is_none());
        assert!(DateSpec::day(2013, 2, 29).is_none());
        assert!(DateSpec::day(2012, 2, 29).is_some());
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            DateSpec::parse_iso("2012-05-10"),
            NaiveDate::from_ymd_opt(2012, 5, 10).map(DateSpec::Day)
        );
        assert_eq!(DateSpec::parse_iso("2012-05"), Some(DateSpec::Month(2012, 5)));
        assert_eq!(
            DateSpec::parse_iso("2012-05-10t10:30:00z"),
            Some(DateSpec::Instant(utc(2012, 5, 10, 10, 30, 0)))
        );
        assert_eq!(DateSpec::parse_iso("2012"), None);
        assert_eq!(DateSpec::parse_iso("2012-13"), None);
        assert_eq!(DateSpec::parse_iso("forest"), None);
    }

    #[test]
    fn test_shift_years_and_months() {
        let now = utc(2014, 3, 31, 12, 0, 0);
        assert_eq!(
            shift(now, TimeUnit::Year, 2, false),
            Some(utc(2012, 3, 31, 12, 0, 0))
        );
        assert_eq!(
            shift(now, TimeUnit::Month, 1, false),
            Some(utc(2014, 2, 28, 12, 0, 0))
        );
        assert_eq!(
            shift(now, TimeUnit::Month, 1, true),
            Some(utc(2014, 4, 30, 12, 0, 0))
        );
    }

    #[test]
    fn test_shift_days_and_weeks() {
        let now = utc(2014, 3, 1, 0, 0, 0);
        assert_eq!(shift(now, TimeUnit::Day, 1, false), Some(utc(2014, 2, 28, 0, 0, 0)));
        assert_eq!(shift(now, TimeUnit::Week, 2, true), Some(utc(2014, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn test_months_range_wraps_year() {
        let range = months_range(2012, 11, 2).unwrap();
        assert_eq!(range.start, Some(utc(2012, 11, 1, 0, 0, 0)));
        assert_eq!(range.end, Some(utc(2013, 2, 28, 23, 59, 59)));
    }

    #[test]
    fn test_season_range() {
        let summer = season_range(Season::Summer, 2012).unwrap();
        assert_eq!(summer.start, Some(utc(2012, 6, 21, 0, 0, 0)));
        assert_eq!(summer.end, Some(utc(2012, 9, 20, 23, 59, 59)));

        let winter = season_range(Season::Winter, 2012).unwrap();
        assert_eq!(winter.end, Some(utc(2013, 3, 20, 23, 59, 59)));
    }

    #[test]
    fn test_range_contains_and_display() {
        let range = TimeRange::since(utc(2012, 1, 1, 0, 0, 0));
        assert!(range.contains(utc(2020, 1, 1, 0, 0, 0)));
        assert!(!range.contains(utc(2011, 12, 31, 0, 0, 0)));
        assert_eq!(range.to_string(), "[2012-01-01T00:00:00+00:00, ..)");
    }

    #[test]
    fn test_range_serializes_rfc3339() {
        let range = TimeRange::until(utc(2012, 5, 31, 23, 59, 59));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":null,"end":"2012-05-31T23:59:59Z"}"#);
    }
}
