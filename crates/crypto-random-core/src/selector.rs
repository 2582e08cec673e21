//! Winner selection.

use tracing::debug;

use crate::entropy::EntropySource;
use crate::error::RandomError;
use crate::shuffle::shuffle;

/// Picks `count` elements from `items` without replacement.
///
/// The result is the first `count` elements of a fresh shuffle, so every
/// ordered selection of `count` distinct positions is equally likely.
/// Duplicate values in `items` are distinct positions and may both win.
///
/// # Errors
///
/// Returns `RandomError::InvalidArgument` if `count` is zero or larger than
/// `items.len()`, or `RandomError::EntropyUnavailable` if the source fails.
pub fn pick_winners<T: Clone>(
    source: &mut dyn EntropySource,
    items: &[T],
    count: usize,
) -> Result<Vec<T>, RandomError> {
    if count == 0 {
        return Err(RandomError::invalid_argument(
            "count must be a positive integer",
        ));
    }
    if count > items.len() {
        return Err(RandomError::invalid_argument(
            "count cannot be greater than number of lines",
        ));
    }

    debug!(count, candidates = items.len(), "picking winners");
    let mut winners = shuffle(source, items)?;
    winners.truncate(count);
    Ok(winners)
}
