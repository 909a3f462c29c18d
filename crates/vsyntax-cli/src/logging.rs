//! Tracing setup for the `vsyntax` binary.
//!
//! Events go to stderr so they never mix with tree dumps or JSON on stdout.
//! Filter with `VSYNTAX_LOG`, e.g. `VSYNTAX_LOG=vsyntax=debug`.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const ENV_VAR: &str = "VSYNTAX_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
