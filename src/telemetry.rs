//! Tracing subscriber setup for hosts

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

use crate::config::ServerConfig;

/// Install the global subscriber.
///
/// `RUST_LOG` from the process environment wins over the configured filter.
pub fn init_tracing(config: &ServerConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(config.log_json.then(|| fmt::layer().json()))
        .with((!config.log_json).then(fmt::layer))
        .try_init()
}
