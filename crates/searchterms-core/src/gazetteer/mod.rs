//! Place-name resolution
//!
//! The location processor hands candidate phrases to a [`Gazetteer`] and keeps
//! the first (longest) one that resolves.
//!
//! Implementations:
//!
//! - **Memory**: name/alias table, built in code or loaded from JSON (`MemoryGazetteer`)
//! - **Cached**: read-mostly cache in front of any other gazetteer (`CachedGazetteer`)
//!
//! # Example
//!
//! ```rust
//! use searchterms_core::gazetteer::{Gazetteer, Geometry, Location, MemoryGazetteer};
//!
//! let gazetteer = MemoryGazetteer::new()
//!     .with(Location::new("Toulouse", Geometry::Point { lon: 1.44, lat: 43.6 }));
//! assert!(gazetteer.resolve("toulouse").is_some());
//! ```

mod cached;
mod error;
mod memory;
mod traits;

pub use cached::{CachedGazetteer, DEFAULT_CACHE_CAPACITY};
pub use error::{GazetteerError, GazetteerResult};
pub use memory::MemoryGazetteer;
pub use traits::{Gazetteer, Geometry, Location};
