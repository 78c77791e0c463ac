//! Analyzer configuration

use serde::{Deserialize, Serialize};

/// Tunable limits of the pattern matchers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    /// Longest keyword or quantity name tried, in words (default: 3)
    pub max_phrase_words: usize,
    /// Longest place name tried against the gazetteer, in words (default: 4)
    pub max_location_words: usize,
    /// Smallest all-digit number read as a year (default: 1000)
    pub min_year: i32,
    /// Largest all-digit number read as a year (default: 9999)
    pub max_year: i32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_phrase_words: 3,
            max_location_words: 4,
            min_year: 1000,
            max_year: 9999,
        }
    }
}

impl AnalyzerConfig {
    pub fn is_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}
