//! Distances that count positions at which two vectors disagree.
//!
//! Elements are compared with exact floating point equality. Values that
//! differ by any amount, however small, count as a mismatch.

use super::utils::count_equal;
use crate::{Float, Result};

/// Computes the Hamming distance between two vectors.
///
/// The Hamming distance is the number of positions at which the
/// corresponding elements are different. It is returned as a float in
/// `[0, n]` where `n` is the length of the vectors.
///
/// # Arguments
///
/// * `x`: A slice of floats.
/// * `y`: A slice of floats.
///
/// # Errors
///
/// * [`DimensionMismatch`](crate::DistanceError::DimensionMismatch) if `x`
///   and `y` have different lengths.
///
/// # Examples
///
/// ```
/// use vector_distances::vectors::hamming;
///
/// let x: Vec<f64> = vec![1.0, 0.0, 1.0, 1.0, 1.0, 0.0, 1.0];
/// let y: Vec<f64> = vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
///
/// assert_eq!(hamming(&x, &y), Ok(2.0));
/// ```
///
/// # References
///
/// * [Hamming distance](https://en.wikipedia.org/wiki/Hamming_distance)
pub fn hamming<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    let equal = count_equal(x, y)?;
    Ok(T::from_usize(x.len() - equal))
}

/// Computes the Jaccard distance between two vectors.
///
/// Each position is treated as a categorical attribute, and the distance is
/// the fraction of positions at which the vectors disagree, i.e. the
/// [`hamming`] distance divided by the length of the vectors. This is not
/// the set-based or weighted (min/max) Jaccard distance.
///
/// For empty vectors the ratio is `0 / 0` and the result is `NaN`.
///
/// # Arguments
///
/// * `x`: A slice of floats.
/// * `y`: A slice of floats.
///
/// # Errors
///
/// * [`DimensionMismatch`](crate::DistanceError::DimensionMismatch) if `x`
///   and `y` have different lengths.
///
/// # Examples
///
/// ```
/// use vector_distances::vectors::jaccard;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
/// let y: Vec<f64> = vec![1.0, 2.0, 0.0, 0.0];
///
/// assert_eq!(jaccard(&x, &y), Ok(0.5));
/// ```
///
/// # References
///
/// * [Jaccard index](https://en.wikipedia.org/wiki/Jaccard_index)
pub fn jaccard<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    let equal = count_equal(x, y)?;
    Ok(T::ONE - T::from_usize(equal) / T::from_usize(x.len()))
}
