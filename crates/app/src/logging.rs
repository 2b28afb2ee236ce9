//! Logging setup for the admin binary.
//!
//! Everything here logs plain events (no spans), so the subscriber is just
//! a level filter plus the configured output format.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Builds the level filter from the configured level string.
fn filter_from_level(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// Installs the global subscriber: json or pretty output at the configured
/// level, with `RUST_LOG` taking precedence when set.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| filter_from_level(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber.with(fmt::layer().pretty().with_target(true)).init();
        }
    }
}
