//! Secure byte source abstraction.
//!
//! In production this wraps the operating system generator. In tests a
//! scripted implementation is injected so the sampling algorithms can be
//! checked draw by draw.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::RandomError;

/// Abstraction over a cryptographically secure byte generator.
pub trait EntropySource: Send {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EntropyUnavailable` if the bytes cannot be
    /// produced. Callers must not fall back to a weaker source.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError>;
}

/// Production source that asks the operating system for every byte.
///
/// Nothing is buffered or seeded between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        let requested = buf.len();
        OsRng.try_fill_bytes(buf).map_err(|e| {
            tracing::error!(error = %e, requested, "OS entropy source failed");
            RandomError::EntropyUnavailable(e.to_string())
        })
    }
}

/// Draws exactly `N` bytes from `source`.
///
/// # Errors
///
/// Propagates `RandomError::EntropyUnavailable` from the source.
pub fn random_bytes<const N: usize>(
    source: &mut dyn EntropySource,
) -> Result<[u8; N], RandomError> {
    let mut buf = [0u8; N];
    source.fill_bytes(&mut buf)?;
    Ok(buf)
}
