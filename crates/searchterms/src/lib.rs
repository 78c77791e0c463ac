//! Command line front end for searchterms-core.

pub mod error;
pub mod load;
pub mod tracing;

pub use error::{Error, Result};
