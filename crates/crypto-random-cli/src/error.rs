//! Crypto Random CLI — startup error types.

use thiserror::Error;

/// Failures that happen before any command runs.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is set to an unsupported value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}
