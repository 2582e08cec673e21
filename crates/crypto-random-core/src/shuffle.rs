//! Fisher-Yates shuffling driven by [`random_int`].

use crate::entropy::EntropySource;
use crate::error::RandomError;
use crate::random::random_int;

/// Returns a uniformly random permutation of `items`.
///
/// The input slice is left untouched; the permutation is built on a copy.
///
/// # Errors
///
/// Returns `RandomError::EntropyUnavailable` if the source fails.
pub fn shuffle<T: Clone>(
    source: &mut dyn EntropySource,
    items: &[T],
) -> Result<Vec<T>, RandomError> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(source, &mut shuffled)?;
    Ok(shuffled)
}

/// Permutes `items` in place.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index at or below it. Empty and single-element slices
/// consume no entropy.
///
/// # Errors
///
/// Returns `RandomError::EntropyUnavailable` if the source fails. The slice
/// may be partially permuted in that case.
pub fn shuffle_in_place<T>(
    source: &mut dyn EntropySource,
    items: &mut [T],
) -> Result<(), RandomError> {
    for i in (1..items.len()).rev() {
        let j = random_index(source, i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

fn random_index(source: &mut dyn EntropySource, len: usize) -> Result<usize, RandomError> {
    let bound = u64::try_from(len).map_err(|_| {
        RandomError::invalid_argument(format!("list length {len} exceeds the sampling range"))
    })?;
    let index = random_int(source, bound)?;
    // index < bound == len, so it always fits back into usize.
    usize::try_from(index)
        .map_err(|_| RandomError::invalid_argument(format!("index {index} exceeds usize")))
}
