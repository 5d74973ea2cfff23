//! Diagnostic tracing for the catalog.
//!
//! Menu and command output go to stdout; tracing goes to stderr so the two
//! never interleave in scripted use.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset, which surfaces catalog-file
/// recovery but nothing routine.
///
/// # Example
/// ```bash
/// RUST_LOG=catalog=debug catalog list
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
