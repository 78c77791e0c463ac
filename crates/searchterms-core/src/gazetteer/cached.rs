//! Memoizing gazetteer wrapper
//!
//! Remote gazetteers are slow compared to the analyzer itself, and the word
//! pass probes every leftover word. The cache remembers misses as well as hits.

use ahash::AHashMap;
use parking_lot::RwLock;

use super::traits::{Gazetteer, Location};

/// Default number of phrases remembered
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Thread-safe lookup cache in front of another gazetteer.
///
/// Lookups take a shared lock; only a miss on a phrase never seen before takes
/// the write lock. Once `capacity` phrases are cached, new phrases are passed
/// through without being stored.
pub struct CachedGazetteer<G> {
    inner: G,
    cache: RwLock<AHashMap<String, Option<Location>>>,
    capacity: usize,
}

impl<G: Gazetteer> CachedGazetteer<G> {
    pub fn new(inner: G) -> Self {
        Self::with_capacity(inner, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            cache: RwLock::new(AHashMap::new()),
            capacity,
        }
    }

    /// Number of cached phrases (hits and misses).
    pub fn cached(&self) -> usize {
        self.cache.read().len()
    }

    /// Drop every cached phrase.
    pub fn clear(&self) {
        self.cache.write().clear();
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Gazetteer> Gazetteer for CachedGazetteer<G> {
    fn resolve(&self, phrase: &str) -> Option<Location> {
        if let Some(cached) = self.cache.read().get(phrase) {
            return cached.clone();
        }

        let resolved = self.inner.resolve(phrase);

        let mut cache = self.cache.write();
        if cache.len() < self.capacity {
            cache.insert(phrase.to_string(), resolved.clone());
        }
        resolved
    }
}
