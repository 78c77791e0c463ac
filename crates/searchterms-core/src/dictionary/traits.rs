//! Dictionary trait definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use super::tags::{Keyword, LocationModifier, QuantityModifier, Season, TimeModifier, TimeUnit};
use crate::normalize;

/// Lookup tables a dictionary exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    QuantityModifier,
    TimeModifier,
    LocationModifier,
    Unit,
    Keyword,
    Month,
    Season,
    Quantity,
    TimeUnit,
    Number,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::QuantityModifier,
        Category::TimeModifier,
        Category::LocationModifier,
        Category::Unit,
        Category::Keyword,
        Category::Month,
        Category::Season,
        Category::Quantity,
        Category::TimeUnit,
        Category::Number,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::QuantityModifier => write!(f, "QUANTITY_MODIFIER"),
            Category::TimeModifier => write!(f, "TIME_MODIFIER"),
            Category::LocationModifier => write!(f, "LOCATION_MODIFIER"),
            Category::Unit => write!(f, "UNIT"),
            Category::Keyword => write!(f, "KEYWORD"),
            Category::Month => write!(f, "MONTH"),
            Category::Season => write!(f, "SEASON"),
            Category::Quantity => write!(f, "QUANTITY"),
            Category::TimeUnit => write!(f, "TIME_UNIT"),
            Category::Number => write!(f, "NUMBER"),
        }
    }
}

/// Localized word to canonical tag lookup.
///
/// Words handed to `lookup` are already normalized with [`Dictionary::normalize`].
/// Multi-word phrases (`cloud cover`) are joined with single spaces.
///
/// Implementations must be read-only while an analysis runs; the analyzer shares
/// one dictionary between concurrent calls.
pub trait Dictionary: Send + Sync {
    /// ISO 639-1 language code, echoed in analysis results
    fn language(&self) -> &str;

    /// Case and accent folding applied to the query before tokenizing.
    fn normalize(&self, text: &str) -> String {
        normalize::fold(text)
    }

    /// Canonical tag for `word` in `category`, if any.
    fn lookup(&self, category: Category, word: &str) -> Option<String>;
}

/// Typed lookups on top of [`Dictionary::lookup`].
pub trait DictionaryExt: Dictionary {
    /// Look up and parse a tag; tags that do not parse are treated as absent.
    fn tag<T: FromStr>(&self, category: Category, word: &str) -> Option<T> {
        let tag = self.lookup(category, word)?;
        match tag.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                trace!(%category, word, tag = %tag, "ignoring unparseable tag");
                None
            }
        }
    }

    fn quantity_modifier(&self, word: &str) -> Option<QuantityModifier> {
        self.tag(Category::QuantityModifier, word)
    }

    fn time_modifier(&self, word: &str) -> Option<TimeModifier> {
        self.tag(Category::TimeModifier, word)
    }

    fn location_modifier(&self, word: &str) -> Option<LocationModifier> {
        self.tag(Category::LocationModifier, word)
    }

    fn time_unit(&self, word: &str) -> Option<TimeUnit> {
        self.tag(Category::TimeUnit, word)
    }

    fn season(&self, word: &str) -> Option<Season> {
        self.tag(Category::Season, word)
    }

    fn keyword(&self, phrase: &str) -> Option<Keyword> {
        self.tag(Category::Keyword, phrase)
    }

    fn unit(&self, word: &str) -> Option<String> {
        self.lookup(Category::Unit, word)
    }

    fn quantity(&self, phrase: &str) -> Option<String> {
        self.lookup(Category::Quantity, phrase)
    }

    /// Month number (1-12)
    fn month(&self, word: &str) -> Option<u32> {
        self.tag::<u32>(Category::Month, word)
            .filter(|m| (1..=12).contains(m))
    }

    /// Numeric literal (`10`, `2.5`) or spelled number (`two`)
    fn number(&self, word: &str) -> Option<f64> {
        word.parse::<f64>()
            .ok()
            .or_else(|| self.tag::<f64>(Category::Number, word))
            .filter(|n| n.is_finite())
    }
}

impl<D: Dictionary + ?Sized> DictionaryExt for D {}
