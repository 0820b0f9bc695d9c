//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with command
//! output on stdout. `RUST_LOG` takes precedence over the built-in defaults.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "pocketbook=warn";
const VERBOSE_DIRECTIVE: &str = "pocketbook=debug";

/// Build the filter used by [`init`]
pub fn env_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(env_filter(verbose))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
