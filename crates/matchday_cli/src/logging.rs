//! Diagnostics for the demo binary.
//!
//! Commentary written to stdout is product output; everything emitted
//! through `tracing` goes to stderr and is filtered by `RUST_LOG`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Reads `RUST_LOG`, defaulting to `info`.
///
/// ```bash
/// RUST_LOG=matchday_core=debug matchday demo
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
