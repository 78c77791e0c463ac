//! Localized vocabulary
//!
//! The analyzer never hard-codes surface words. Every modifier, unit, month,
//! season and keyword is resolved through a [`Dictionary`], which maps a
//! normalized word (or short phrase) to a canonical tag per [`Category`].
//!
//! Implementations:
//!
//! - **Memory**: hash-map tables, built in code or loaded from JSON (`MemoryDictionary`)
//!
//! # Example
//!
//! ```rust
//! use searchterms_core::dictionary::{DictionaryExt, MemoryDictionary, TimeModifier};
//!
//! let dictionary = MemoryDictionary::english();
//! assert_eq!(dictionary.time_modifier("since"), Some(TimeModifier::Since));
//! assert_eq!(dictionary.month("march"), Some(3));
//! ```

mod error;
mod memory;
mod tags;
mod traits;

pub use error::{DictionaryError, DictionaryResult};
pub use memory::MemoryDictionary;
pub use tags::{
    Keyword, LocationModifier, QuantityModifier, Season, TimeModifier, TimeUnit, UnknownTag,
};
pub use traits::{Category, Dictionary, DictionaryExt};
