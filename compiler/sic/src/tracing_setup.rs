//! Subscriber setup for `tracing` output.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable checked first for the log filter.
pub const LOG_ENV: &str = "S_LOG";

/// Install the stderr subscriber.
///
/// Does nothing unless `S_LOG` or `RUST_LOG` is set, e.g.
/// `S_LOG=s_eval=debug s run prog.s`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var_os(LOG_ENV).is_some() {
            EnvFilter::from_env(LOG_ENV)
        } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        // stdout belongs to the program being run.
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
