//! Logging setup for the phrasefuzz command.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a custom default filter.
///
/// `RUST_LOG` takes precedence when set. Output is compact and goes to
/// stderr so stdout stays clean for results.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
