//! In-memory dictionary
//!
//! A hash-map backed dictionary, loadable from JSON or built in code. Ships with
//! a built-in English vocabulary for earth-observation catalogs.

use ahash::AHashMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::error::{DictionaryError, DictionaryResult};
use super::tags::{Keyword, LocationModifier, QuantityModifier, Season, TimeModifier, TimeUnit};
use super::traits::{Category, Dictionary};
use crate::normalize;

/// On-disk dictionary layout
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    language: String,
    #[serde(default)]
    entries: HashMap<Category, HashMap<String, String>>,
}

/// In-memory dictionary.
///
/// Words are folded with [`normalize::fold_phrase`] on insertion so lookups with
/// normalized query words always hit.
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    language: String,
    entries: AHashMap<Category, AHashMap<String, String>>,
}

impl MemoryDictionary {
    /// Create an empty dictionary for `language`.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: AHashMap::new(),
        }
    }

    /// Add an entry, validating the tag against its category.
    pub fn insert(
        &mut self,
        category: Category,
        word: &str,
        tag: impl Into<String>,
    ) -> DictionaryResult<()> {
        let word = normalize::fold_phrase(word);
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord(category));
        }
        let tag = tag.into();
        validate(category, &word, &tag)?;
        self.entries.entry(category).or_default().insert(word, tag);
        Ok(())
    }

    /// Builder-style insert for tables known to be valid.
    pub fn with(mut self, category: Category, word: &str, tag: &str) -> Self {
        if let Err(e) = self.insert(category, word, tag) {
            tracing::warn!(error = %e, "skipping dictionary entry");
        }
        self
    }

    /// Parse a dictionary from its JSON representation.
    ///
    /// ```json
    /// { "language": "en", "entries": { "TIME_MODIFIER": { "since": "SINCE" } } }
    /// ```
    pub fn from_json(json: &str) -> DictionaryResult<Self> {
        let file: DictionaryFile = serde_json::from_str(json)?;
        let mut dictionary = Self::new(file.language);
        for (category, words) in file.entries {
            for (word, tag) in words {
                dictionary.insert(category, &word, tag)?;
            }
        }
        Ok(dictionary)
    }

    /// Load a dictionary from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> DictionaryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total number of entries across categories.
    pub fn len(&self) -> usize {
        self.entries.values().map(|words| words.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Built-in English vocabulary.
    pub fn english() -> Self {
        let mut dictionary = Self::new("en");
        for (category, table) in ENGLISH {
            for (word, tag) in *table {
                if let Err(e) = dictionary.insert(*category, word, *tag) {
                    tracing::warn!(error = %e, "skipping built-in dictionary entry");
                }
            }
        }
        dictionary
    }
}

impl Dictionary for MemoryDictionary {
    fn language(&self) -> &str {
        &self.language
    }

    fn lookup(&self, category: Category, word: &str) -> Option<String> {
        self.entries.get(&category)?.get(word).cloned()
    }
}

/// Check that `tag` is representable in `category`.
fn validate(category: Category, word: &str, tag: &str) -> DictionaryResult<()> {
    let valid = match category {
        Category::QuantityModifier => tag.parse::<QuantityModifier>().is_ok(),
        Category::TimeModifier => tag.parse::<TimeModifier>().is_ok(),
        Category::LocationModifier => tag.parse::<LocationModifier>().is_ok(),
        Category::TimeUnit => tag.parse::<TimeUnit>().is_ok(),
        Category::Season => tag.parse::<Season>().is_ok(),
        Category::Keyword => tag.parse::<Keyword>().is_ok(),
        Category::Month => tag
            .parse::<u32>()
            .map(|m| (1..=12).contains(&m))
            .unwrap_or(false),
        Category::Number => tag.parse::<f64>().map(f64::is_finite).unwrap_or(false),
        Category::Unit | Category::Quantity => !tag.trim().is_empty(),
    };
    if valid {
        Ok(())
    } else {
        Err(DictionaryError::InvalidTag {
            category,
            word: word.to_string(),
            tag: tag.to_string(),
        })
    }
}

type Table = &'static [(&'static str, &'static str)];

const ENGLISH: &[(Category, Table)] = &[
    (
        Category::QuantityModifier,
        &[
            ("with", "WITH"),
            ("without", "WITHOUT"),
            ("lesser", "LESSER"),
            ("less", "LESSER"),
            ("lower", "LESSER"),
            ("smaller", "LESSER"),
            ("below", "LESSER"),
            ("greater", "GREATER"),
            ("more", "GREATER"),
            ("higher", "GREATER"),
            ("larger", "GREATER"),
            ("above", "GREATER"),
            ("equal", "EQUAL"),
            ("equals", "EQUAL"),
            ("than", "THAN"),
            // `equal to`; also a range connector below
            ("to", "THAN"),
            ("of", "OF"),
        ],
    ),
    (
        Category::TimeModifier,
        &[
            ("today", "TODAY"),
            ("tomorrow", "TOMORROW"),
            ("yesterday", "YESTERDAY"),
            ("after", "AFTER"),
            ("before", "BEFORE"),
            ("between", "BETWEEN"),
            ("and", "AND"),
            ("to", "AND"),
            ("in", "IN"),
            ("during", "IN"),
            ("last", "LAST"),
            ("past", "LAST"),
            ("next", "NEXT"),
            ("since", "SINCE"),
            ("ago", "AGO"),
        ],
    ),
    (Category::LocationModifier, &[("in", "IN"), ("at", "IN")]),
    (
        Category::Unit,
        &[
            ("%", "percent"),
            ("percent", "percent"),
            ("percents", "percent"),
            ("m", "meter"),
            ("meter", "meter"),
            ("meters", "meter"),
            ("metre", "meter"),
            ("metres", "meter"),
            ("km", "kilometer"),
            ("kilometer", "kilometer"),
            ("kilometers", "kilometer"),
            ("degree", "degree"),
            ("degrees", "degree"),
        ],
    ),
    (
        Category::Quantity,
        &[
            ("cloud cover", "cloud cover"),
            ("cloudcover", "cloud cover"),
            ("snow cover", "snow cover"),
            ("depth", "depth"),
            ("humidity", "humidity"),
            ("resolution", "resolution"),
            ("incidence angle", "incidence angle"),
        ],
    ),
    (
        Category::Keyword,
        &[
            ("forest", "landuse:forest"),
            ("forests", "landuse:forest"),
            ("urban", "landuse:urban"),
            ("city", "landuse:urban"),
            ("cities", "landuse:urban"),
            ("water", "landuse:water"),
            ("desert", "landuse:desert"),
            ("cultivated", "landuse:cultivated"),
            ("clouds", "clouds"),
            ("spot5", "platform:SPOT5"),
            ("spot 5", "platform:SPOT5"),
            ("spot6", "platform:SPOT6"),
            ("pleiades", "platform:PHR"),
            ("sentinel2", "platform:S2"),
            ("sentinel 2", "platform:S2"),
            ("landsat8", "platform:LANDSAT8"),
            ("landsat 8", "platform:LANDSAT8"),
        ],
    ),
    (
        Category::Month,
        &[
            ("january", "1"),
            ("jan", "1"),
            ("february", "2"),
            ("feb", "2"),
            ("march", "3"),
            ("mar", "3"),
            ("april", "4"),
            ("apr", "4"),
            ("may", "5"),
            ("june", "6"),
            ("jun", "6"),
            ("july", "7"),
            ("jul", "7"),
            ("august", "8"),
            ("aug", "8"),
            ("september", "9"),
            ("sep", "9"),
            ("sept", "9"),
            ("october", "10"),
            ("oct", "10"),
            ("november", "11"),
            ("nov", "11"),
            ("december", "12"),
            ("dec", "12"),
        ],
    ),
    (
        Category::Season,
        &[
            ("spring", "spring"),
            ("summer", "summer"),
            ("autumn", "autumn"),
            ("fall", "autumn"),
            ("winter", "winter"),
        ],
    ),
    (
        Category::TimeUnit,
        &[
            ("year", "year"),
            ("years", "year"),
            ("month", "month"),
            ("months", "month"),
            ("week", "week"),
            ("weeks", "week"),
            ("day", "day"),
            ("days", "day"),
        ],
    ),
    (
        Category::Number,
        &[
            ("one", "1"),
            ("two", "2"),
            ("three", "3"),
            ("four", "4"),
            ("five", "5"),
            ("six", "6"),
            ("seven", "7"),
            ("eight", "8"),
            ("nine", "9"),
            ("ten", "10"),
            ("twelve", "12"),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryExt;

    #[test]
    fn test_insert_normalizes_words() {
        let mut dictionary = MemoryDictionary::new("fr");
        dictionary
            .insert(Category::Month, "Février", "2")
            .unwrap();
        assert_eq!(dictionary.month("fevrier"), Some(2));
    }

    #[test]
    fn test_insert_rejects_invalid_tag() {
        let mut dictionary = MemoryDictionary::new("en");
        let err = dictionary
            .insert(Category::TimeModifier, "whenever", "WHENEVER")
            .unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidTag { category: Category::TimeModifier, .. }));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_insert_rejects_empty_word() {
        let mut dictionary = MemoryDictionary::new("en");
        let err = dictionary.insert(Category::Unit, "  ", "meter").unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyWord(Category::Unit)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "language": "fr",
            "entries": {
                "TIME_MODIFIER": { "depuis": "SINCE", "entre": "BETWEEN" },
                "MONTH": { "mars": "3" },
                "KEYWORD": { "forêt": "landuse:forest" }
            }
        }"#;
        let dictionary = MemoryDictionary::from_json(json).unwrap();
        assert_eq!(dictionary.language(), "fr");
        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.time_modifier("depuis"), Some(TimeModifier::Since));
        assert_eq!(dictionary.month("mars"), Some(3));
        assert_eq!(
            dictionary.keyword("foret"),
            Some(Keyword::new("landuse", "forest"))
        );
    }

    #[test]
    fn test_from_json_invalid_month() {
        let json = r#"{ "language": "en", "entries": { "MONTH": { "smarch": "13" } } }"#;
        assert!(matches!(
            MemoryDictionary::from_json(json),
            Err(DictionaryError::InvalidTag { .. })
        ));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            MemoryDictionary::from_json("{ not json"),
            Err(DictionaryError::Json(_))
        ));
    }

    #[test]
    fn test_english_is_complete() {
        let en = MemoryDictionary::english();
        assert_eq!(en.language(), "en");
        assert_eq!(en.quantity_modifier("without"), Some(QuantityModifier::Without));
        assert_eq!(en.time_modifier("between"), Some(TimeModifier::Between));
        assert_eq!(en.location_modifier("in"), Some(LocationModifier::In));
        assert_eq!(en.unit("%"), Some("percent".to_string()));
        assert_eq!(en.quantity("cloud cover"), Some("cloud cover".to_string()));
        assert_eq!(en.time_unit("years"), Some(TimeUnit::Year));
        assert_eq!(en.season("fall"), Some(Season::Autumn));
        assert_eq!(en.month("may"), Some(5));
        assert_eq!(en.number("three"), Some(3.0));
        assert_eq!(
            en.keyword("spot 5"),
            Some(Keyword::new("platform", "SPOT5"))
        );
    }
}
