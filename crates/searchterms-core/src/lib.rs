//! Searchterms Core
//!
//! Rule-based analysis of free-text search queries. A query such as
//! `spot5 images with forest in france between march and may 2012` is split
//! into words and matched against a localized [`Dictionary`] to extract:
//!
//! - **what**: keywords (`landuse:forest`) and quantity comparisons (`cloud cover < 10 percent`)
//! - **when**: absolute and relative time ranges
//! - **where**: places resolved through an optional [`Gazetteer`]
//!
//! Words that match nothing are reported back, as are recoverable errors such
//! as an unknown unit.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{TimeZone, Utc};
//! use searchterms_core::{Geometry, Location, MemoryGazetteer, QueryAnalyzer};
//!
//! let gazetteer = MemoryGazetteer::new().with(Location::new(
//!     "France",
//!     Geometry::Point { lon: 2.35, lat: 48.85 },
//! ));
//! let analyzer = QueryAnalyzer::english().with_gazetteer(Arc::new(gazetteer));
//!
//! let now = Utc.with_ymd_and_hms(2014, 6, 15, 0, 0, 0).unwrap();
//! let result = analyzer
//!     .analyze_at("spot5 images with forest in france between march and may 2012", now)
//!     .unwrap();
//!
//! assert_eq!(result.what.len(), 2);
//! assert_eq!(result.when.len(), 1);
//! assert_eq!(result.locations[0].name, "France");
//! assert_eq!(result.unconsumed().collect::<Vec<_>>(), vec!["images"]);
//! ```

pub mod analyzer;
pub mod dictionary;
pub mod gazetteer;
pub mod normalize;

// Re-export main types at crate root
pub use analyzer::{
    AnalysisError, AnalysisResult, AnalyzeError, AnalyzerConfig, Claim, Comparator, ErrorCode,
    Facet, QueryAnalyzer, TimeRange, WhatFacet, Word,
};
pub use dictionary::{Category, Dictionary, DictionaryError, DictionaryExt, MemoryDictionary};
pub use gazetteer::{
    CachedGazetteer, Gazetteer, GazetteerError, Geometry, Location, MemoryGazetteer,
};
