//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_FILTER, LogFormat};
use crate::error::AppError;

/// Installs the global subscriber.
///
/// Records go to stderr so stdout carries nothing but command output. The
/// filter comes from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns `AppError::Logging` if a global subscriber is already set.
pub fn init_logging(config: &Config) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match config.log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))
}
