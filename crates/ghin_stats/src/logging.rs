//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `GHIN_STATS_LOG=ghin_core=debug`.
pub const LOG_ENV: &str = "GHIN_STATS_LOG";

/// Install the stderr log subscriber.
///
/// Falls back to `warn` when `GHIN_STATS_LOG` is unset or invalid. Safe to
/// call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // stdout carries the report
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
