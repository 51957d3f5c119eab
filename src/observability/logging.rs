//! Structured logging.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
pub fn init_logging(config: &LoggingConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
