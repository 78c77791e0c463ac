//! Logging setup for the searchterms binary.
//!
//! Stdout carries the JSON result, so log lines go to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a custom default filter.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (`RUST_LOG` wins over `default_filter`)
/// - Compact format on stderr
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
