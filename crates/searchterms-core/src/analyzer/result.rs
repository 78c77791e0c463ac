//! Analysis output types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::AnalysisError;
use super::temporal::TimeRange;
use super::words::Word;
use crate::gazetteer::Location;

/// Comparison operator of a quantity facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Comparator {
    Lt,
    Gt,
    Eq,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Lt => write!(f, "<"),
            Comparator::Gt => write!(f, ">"),
            Comparator::Eq => write!(f, "="),
        }
    }
}

/// A categorical or quantity constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WhatFacet {
    /// Presence (or absence, when `excluded`) of a keyword
    Keyword {
        kind: String,
        value: String,
        excluded: bool,
    },
    /// Numeric comparison on a measured quantity
    Quantity {
        quantity: String,
        comparator: Comparator,
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
}

impl fmt::Display for WhatFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhatFacet::Keyword {
                kind,
                value,
                excluded,
            } => {
                if *excluded {
                    write!(f, "-")?;
                }
                write!(f, "{}:{}", kind, value)
            }
            WhatFacet::Quantity {
                quantity,
                comparator,
                value,
                unit,
            } => {
                write!(f, "{} {} {}", quantity, comparator, value)?;
                if let Some(unit) = unit {
                    write!(f, " {}", unit)?;
                }
                Ok(())
            }
        }
    }
}

/// Everything extracted from one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub query: String,
    pub language: String,
    /// Every word with its final claim state
    pub processed_words: Vec<Word>,
    pub what: Vec<WhatFacet>,
    pub when: Vec<TimeRange>,
    #[serde(rename = "where")]
    pub locations: Vec<Location>,
    pub errors: Vec<AnalysisError>,
    pub processing_time_seconds: f64,
}

impl AnalysisResult {
    /// Words left over after both passes
    pub fn unconsumed(&self) -> impl Iterator<Item = &str> {
        self.processed_words
            .iter()
            .filter(|w| !w.consumed())
            .map(|w| w.text.as_str())
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if no facet of any kind was extracted
    pub fn is_empty(&self) -> bool {
        self.what.is_empty() && self.when.is_empty() && self.locations.is_empty()
    }
}
