//! Logging setup for the prompthandler binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the embedding application. The CLI installs one here.

use crate::config::{Config, LogFormat};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` overrides `level` when set. `verbose` raises the fallback level
/// to `debug`. Calling this more than once keeps the first subscriber.
pub fn init_logging(level: &str, format: LogFormat, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(level, ?format, "logging initialized");
    }
}

/// Install a subscriber from configuration.
pub fn init_from_config(config: &Config, verbose: bool) {
    init_logging(&config.log_level, config.log_format, verbose);
}
