//! Canonical tags returned by dictionary lookups

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A canonical tag string that does not name a known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} tag '{tag}'")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub tag: String,
}

impl UnknownTag {
    fn new(kind: &'static str, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
        }
    }
}

/// Modifiers handled by the what processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityModifier {
    With,
    Without,
    Lesser,
    Greater,
    Equal,
    // Connectors
    Than,
    Of,
}

impl FromStr for QuantityModifier {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WITH" => Ok(QuantityModifier::With),
            "WITHOUT" => Ok(QuantityModifier::Without),
            "LESSER" => Ok(QuantityModifier::Lesser),
            "GREATER" => Ok(QuantityModifier::Greater),
            "EQUAL" => Ok(QuantityModifier::Equal),
            "THAN" => Ok(QuantityModifier::Than),
            "OF" => Ok(QuantityModifier::Of),
            _ => Err(UnknownTag::new("quantity modifier", s)),
        }
    }
}

impl fmt::Display for QuantityModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityModifier::With => write!(f, "WITH"),
            QuantityModifier::Without => write!(f, "WITHOUT"),
            QuantityModifier::Lesser => write!(f, "LESSER"),
            QuantityModifier::Greater => write!(f, "GREATER"),
            QuantityModifier::Equal => write!(f, "EQUAL"),
            QuantityModifier::Than => write!(f, "THAN"),
            QuantityModifier::Of => write!(f, "OF"),
        }
    }
}

/// Modifiers handled by the when processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeModifier {
    Today,
    Tomorrow,
    Yesterday,
    After,
    Before,
    Between,
    In,
    Last,
    Next,
    Since,
    Ago,
    // Connector for `between ... and ...`
    And,
}

impl FromStr for TimeModifier {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TODAY" => Ok(TimeModifier::Today),
            "TOMORROW" => Ok(TimeModifier::Tomorrow),
            "YESTERDAY" => Ok(TimeModifier::Yesterday),
            "AFTER" => Ok(TimeModifier::After),
            "BEFORE" => Ok(TimeModifier::Before),
            "BETWEEN" => Ok(TimeModifier::Between),
            "IN" => Ok(TimeModifier::In),
            "LAST" => Ok(TimeModifier::Last),
            "NEXT" => Ok(TimeModifier::Next),
            "SINCE" => Ok(TimeModifier::Since),
            "AGO" => Ok(TimeModifier::Ago),
            "AND" => Ok(TimeModifier::And),
            _ => Err(UnknownTag::new("time modifier", s)),
        }
    }
}

impl fmt::Display for TimeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeModifier::Today => write!(f, "TODAY"),
            TimeModifier::Tomorrow => write!(f, "TOMORROW"),
            TimeModifier::Yesterday => write!(f, "YESTERDAY"),
            TimeModifier::After => write!(f, "AFTER"),
            TimeModifier::Before => write!(f, "BEFORE"),
            TimeModifier::Between => write!(f, "BETWEEN"),
            TimeModifier::In => write!(f, "IN"),
            TimeModifier::Last => write!(f, "LAST"),
            TimeModifier::Next => write!(f, "NEXT"),
            TimeModifier::Since => write!(f, "SINCE"),
            TimeModifier::Ago => write!(f, "AGO"),
            TimeModifier::And => write!(f, "AND"),
        }
    }
}

/// Modifiers handled by the location processor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationModifier {
    In,
}

impl FromStr for LocationModifier {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IN" => Ok(LocationModifier::In),
            _ => Err(UnknownTag::new("location modifier", s)),
        }
    }
}

impl fmt::Display for LocationModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationModifier::In => write!(f, "IN"),
        }
    }
}

/// Calendar units usable in relative expressions (`last 2 years`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Month,
    Week,
    Day,
}

impl FromStr for TimeUnit {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "year" => Ok(TimeUnit::Year),
            "month" => Ok(TimeUnit::Month),
            "week" => Ok(TimeUnit::Week),
            "day" => Ok(TimeUnit::Day),
            _ => Err(UnknownTag::new("time unit", s)),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Year => write!(f, "year"),
            TimeUnit::Month => write!(f, "month"),
            TimeUnit::Week => write!(f, "week"),
            TimeUnit::Day => write!(f, "day"),
        }
    }
}

/// Astronomical seasons (northern hemisphere)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Month and day the season starts on
    pub fn start(&self) -> (u32, u32) {
        match self {
            Season::Spring => (3, 21),
            Season::Summer => (6, 21),
            Season::Autumn => (9, 21),
            Season::Winter => (12, 21),
        }
    }

    /// Month and day the season ends on (inclusive)
    pub fn end(&self) -> (u32, u32) {
        match self {
            Season::Spring => (6, 20),
            Season::Summer => (9, 20),
            Season::Autumn => (12, 20),
            Season::Winter => (3, 20),
        }
    }

    /// Winter runs into the following year
    pub fn spans_new_year(&self) -> bool {
        matches!(self, Season::Winter)
    }
}

impl FromStr for Season {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(UnknownTag::new("season", s)),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// A typed keyword (`landuse:forest`, `platform:SPOT5`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keyword {
    pub kind: String,
    pub value: String,
}

impl Keyword {
    /// Type given to keywords whose tag carries no `type:` prefix
    pub const DEFAULT_KIND: &'static str = "keyword";

    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Keyword {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = match s.split_once(':') {
            Some((kind, value)) => (kind.trim(), value.trim()),
            None => (Keyword::DEFAULT_KIND, s.trim()),
        };
        if kind.is_empty() || value.is_empty() {
            return Err(UnknownTag::new("keyword", s));
        }
        Ok(Keyword::new(kind, value))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}
