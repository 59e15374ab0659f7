//! Structured logging setup for the `quantlab` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application.

use tracing_subscriber::{ fmt, prelude::*, EnvFilter };

/// Default filter directive
///
/// `RUST_LOG` wins when set.
///
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global compact subscriber, writing to stderr.
///
/// Later calls are ignored.
///
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
        );

    // already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}
