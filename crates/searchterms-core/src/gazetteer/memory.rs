//! In-memory gazetteer
//!
//! Name and alias lookup table. Useful for tests, demos and small fixed
//! catalogs of areas of interest.

use ahash::AHashMap;
use serde::Deserialize;
use std::path::Path;

use super::error::{GazetteerError, GazetteerResult};
use super::traits::{Gazetteer, Geometry, Location};
use crate::normalize;

/// On-disk gazetteer entry
#[derive(Debug, Deserialize)]
struct GazetteerEntry {
    name: String,
    #[serde(default)]
    kind: Option<String>,
    geometry: Geometry,
    #[serde(default)]
    aliases: Vec<String>,
}

/// In-memory gazetteer keyed by folded place name.
#[derive(Debug, Clone, Default)]
pub struct MemoryGazetteer {
    places: AHashMap<String, Location>,
}

impl MemoryGazetteer {
    pub fn new() -> Self {
        Self {
            places: AHashMap::new(),
        }
    }

    /// Register a location under its own name.
    pub fn insert(&mut self, location: Location) -> GazetteerResult<()> {
        let key = normalize::fold_phrase(&location.name);
        if key.is_empty() {
            return Err(GazetteerError::EmptyName);
        }
        self.places.insert(key, location);
        Ok(())
    }

    /// Register an additional name for a location.
    pub fn insert_alias(&mut self, alias: &str, location: Location) -> GazetteerResult<()> {
        let key = normalize::fold_phrase(alias);
        if key.is_empty() {
            return Err(GazetteerError::EmptyName);
        }
        self.places.insert(key, location);
        Ok(())
    }

    /// Builder-style insert.
    pub fn with(mut self, location: Location) -> Self {
        if let Err(e) = self.insert(location) {
            tracing::warn!(error = %e, "skipping gazetteer entry");
        }
        self
    }

    /// Parse a gazetteer from a JSON array of entries.
    ///
    /// ```json
    /// [{ "name": "France", "kind": "country",
    ///    "geometry": { "type": "boundingBox", "west": -5.1, "south": 41.3, "east": 9.6, "north": 51.1 },
    ///    "aliases": ["république française"] }]
    /// ```
    pub fn from_json(json: &str) -> GazetteerResult<Self> {
        let entries: Vec<GazetteerEntry> = serde_json::from_str(json)?;
        let mut gazetteer = Self::new();
        for entry in entries {
            let location = Location {
                name: entry.name,
                kind: entry.kind,
                geometry: entry.geometry,
            };
            for alias in &entry.aliases {
                gazetteer.insert_alias(alias, location.clone())?;
            }
            gazetteer.insert(location)?;
        }
        Ok(gazetteer)
    }

    /// Load a gazetteer from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> GazetteerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Number of names (including aliases).
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Gazetteer for MemoryGazetteer {
    fn resolve(&self, phrase: &str) -> Option<Location> {
        self.places.get(phrase).cloned()
    }
}
