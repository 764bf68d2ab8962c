//! Structured logging initialization

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error raised when the global subscriber cannot be installed
#[derive(Debug, thiserror::Error)]
pub enum LoggingInitError {
    #[error("Invalid log filter '{directive}': {source}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so command results on stdout stay machine-readable.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingInitError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| LoggingInitError::Install(e.to_string()))
}

fn build_filter(directive: &str) -> Result<EnvFilter, LoggingInitError> {
    EnvFilter::try_new(directive).map_err(|source| LoggingInitError::Filter {
        directive: directive.to_string(),
        source,
    })
}
