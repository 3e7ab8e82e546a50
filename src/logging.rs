//! Tracing setup
//!
//! Installs a global `tracing` subscriber writing to stderr. `RUST_LOG`
//! overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive, or the verbose one when `verbose` is set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "daily_rollover=debug"
    } else {
        "daily_rollover=warn"
    }
}

/// Initialize the global tracing subscriber once
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
