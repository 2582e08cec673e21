//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Every failure a randomness operation or its input handling can produce.
#[derive(Debug, Error)]
pub enum RandomError {
    /// Malformed or out-of-range user input.
    #[error("{0}")]
    InvalidArgument(String),

    /// The input file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The input file exists but could not be read as text.
    #[error("file unreadable: {}: {}", .path.display(), .reason)]
    FileUnreadable {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O or decoding error.
        reason: String,
    },

    /// The input file contains no usable lines.
    #[error("file has no non-empty lines")]
    EmptyInput,

    /// The operating system could not supply secure random bytes.
    #[error("secure entropy unavailable: {0}")]
    EntropyUnavailable(String),
}

impl RandomError {
    /// Shorthand for [`RandomError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Whether the error means the process can no longer produce secure
    /// output at all, as opposed to a problem with the caller's input.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EntropyUnavailable(_))
    }
}
