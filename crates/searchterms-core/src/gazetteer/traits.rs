//! Gazetteer trait and location types

use serde::{Deserialize, Serialize};

/// Footprint of a resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Geometry {
    Point {
        lon: f64,
        lat: f64,
    },
    BoundingBox {
        west: f64,
        south: f64,
        east: f64,
        north: f64,
    },
    /// Well-known text, passed through untouched
    Wkt {
        wkt: String,
    },
}

/// A place resolved by a gazetteer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Canonical place name
    pub name: String,
    /// Place type (`country`, `state`, `city`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub geometry: Geometry,
}

impl Location {
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            kind: None,
            geometry,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Place-name resolution.
///
/// `phrase` is a normalized (lowercase, accent-free) run of one or more query
/// words joined by single spaces.
pub trait Gazetteer: Send + Sync {
    fn resolve(&self, phrase: &str) -> Option<Location>;
}

impl<G: Gazetteer + ?Sized> Gazetteer for std::sync::Arc<G> {
    fn resolve(&self, phrase: &str) -> Option<Location> {
        (**self).resolve(phrase)
    }
}
