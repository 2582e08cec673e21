//! Test entropy — deterministic `EntropySource` implementations for tests.

use crypto_random_core::entropy::EntropySource;
use crypto_random_core::error::RandomError;

/// A source that fills every byte with the same value. Suitable for tests
/// that only need *some* bytes, or that probe the extremes (`0x00`, `0xFF`).
#[derive(Debug, Clone, Copy)]
pub struct ConstantEntropy(pub u8);

impl EntropySource for ConstantEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        buf.fill(self.0);
        Ok(())
    }
}

/// A source that hands out a predetermined byte sequence. Panics if the
/// sequence is exhausted, which doubles as an assertion on how many bytes an
/// algorithm consumed.
#[derive(Debug)]
pub struct SequenceEntropy {
    bytes: Vec<u8>,
    index: usize,
}

impl SequenceEntropy {
    /// Create a new `SequenceEntropy` over raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, index: 0 }
    }

    /// One big-endian 32-bit word per draw of a bound that fits in `u32`.
    #[must_use]
    pub fn from_u32s(words: &[u32]) -> Self {
        Self::new(words.iter().flat_map(|w| w.to_be_bytes()).collect())
    }

    /// One big-endian 64-bit word per draw of a bound above `u32::MAX`.
    #[must_use]
    pub fn from_u64s(words: &[u64]) -> Self {
        Self::new(words.iter().flat_map(|w| w.to_be_bytes()).collect())
    }

    /// Bytes not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.index
    }
}

impl EntropySource for SequenceEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), RandomError> {
        let end = self.index + buf.len();
        assert!(
            end <= self.bytes.len(),
            "SequenceEntropy exhausted: wanted {} bytes, {} left",
            buf.len(),
            self.remaining()
        );
        buf.copy_from_slice(&self.bytes[self.index..end]);
        self.index = end;
        Ok(())
    }
}

/// A source that always fails, standing in for an unavailable OS generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> Result<(), RandomError> {
        Err(RandomError::EntropyUnavailable(
            "simulated entropy failure".to_owned(),
        ))
    }
}
