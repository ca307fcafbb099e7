//! Helpers shared by the vector distance functions.

use crate::{DistanceError, Float, Result};

/// Checks that `x` and `y` have the same length and returns an iterator over
/// their aligned elements.
///
/// # Errors
///
/// * [`DistanceError::DimensionMismatch`] if the lengths differ. Nothing is
///   computed over the shared prefix.
pub(crate) fn pairs<'a, T: Float>(
    x: &'a [T],
    y: &'a [T],
) -> Result<impl Iterator<Item = (T, T)> + 'a> {
    if x.len() != y.len() {
        ftlog::debug!(
            "Rejecting vectors with mismatched lengths: {} and {}.",
            x.len(),
            y.len()
        );
        return Err(DistanceError::DimensionMismatch {
            first: x.len(),
            second: y.len(),
        });
    }

    Ok(x.iter().copied().zip(y.iter().copied()))
}

/// Counts the indices at which `x` and `y` hold exactly equal values.
///
/// # Errors
///
/// * [`DistanceError::DimensionMismatch`] if the lengths differ.
#[allow(clippy::float_cmp)]
pub(crate) fn count_equal<T: Float>(x: &[T], y: &[T]) -> Result<usize> {
    Ok(pairs(x, y)?.filter(|&(a, b)| a == b).count())
}
