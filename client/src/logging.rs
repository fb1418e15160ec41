//! Logging initialization.
//!
//! The UI host may embed this crate more than once per process (tests, hot
//! reload), so initialization never panics when a subscriber is already set.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.filter`. Returns `false` when a global
/// subscriber was already installed.
///
/// # Errors
///
/// Returns an error if the configured filter cannot be parsed.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<bool> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
            .is_ok()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .try_init()
            .is_ok()
    };

    Ok(installed)
}
