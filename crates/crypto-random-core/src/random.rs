//! Bounded integers and unit floats.

use tracing::trace;

use crate::entropy::{EntropySource, random_bytes};
use crate::error::RandomError;

/// 2^48, the denominator for 48-bit unit floats.
const FLOAT_SCALE: f64 = 281_474_976_710_656.0;

/// Returns a uniformly distributed integer in `[0, max_exclusive)`.
///
/// Bounds that fit in a `u32` are sampled from 32-bit big-endian draws;
/// larger bounds use 64-bit draws, so every bound in `1..=u64::MAX` is
/// supported. Draws that would introduce modulo bias are rejected and
/// redrawn, which takes fewer than two draws on average.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `max_exclusive` is zero, or
/// `RandomError::EntropyUnavailable` if the source fails.
pub fn random_int(source: &mut dyn EntropySource, max_exclusive: u64) -> Result<u64, RandomError> {
    if max_exclusive == 0 {
        return Err(RandomError::invalid_argument(
            "maxExclusive must be a positive integer",
        ));
    }

    match u32::try_from(max_exclusive) {
        Ok(bound) => sample_u32(source, bound).map(u64::from),
        Err(_) => sample_u64(source, max_exclusive),
    }
}

fn sample_u32(source: &mut dyn EntropySource, bound: u32) -> Result<u32, RandomError> {
    let limit = u32::MAX - (u32::MAX % bound);
    loop {
        let drawn = u32::from_be_bytes(random_bytes(source)?);
        if drawn < limit {
            return Ok(drawn % bound);
        }
        trace!(drawn, limit, bound, "rejected 32-bit draw");
    }
}

fn sample_u64(source: &mut dyn EntropySource, bound: u64) -> Result<u64, RandomError> {
    let limit = u64::MAX - (u64::MAX % bound);
    loop {
        let drawn = u64::from_be_bytes(random_bytes(source)?);
        if drawn < limit {
            return Ok(drawn % bound);
        }
        trace!(drawn, limit, bound, "rejected 64-bit draw");
    }
}

/// Returns a uniformly distributed float in `[0.0, 1.0)` with 48 bits of
/// precision.
///
/// # Errors
///
/// Returns `RandomError::EntropyUnavailable` if the source fails.
pub fn random_float(source: &mut dyn EntropySource) -> Result<f64, RandomError> {
    let mut buf = [0u8; 8];
    source.fill_bytes(&mut buf[2..])?;
    let value = u64::from_be_bytes(buf);

    // Every 48-bit integer is exactly representable in an f64.
    #[allow(clippy::cast_precision_loss)]
    let numerator = value as f64;
    Ok(numerator / FLOAT_SCALE)
}
