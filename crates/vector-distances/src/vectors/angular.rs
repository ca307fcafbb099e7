//! Angular distances between vectors.

use super::utils::pairs;
use crate::{Float, Result};

/// Computes the Cosine distance between two vectors.
///
/// The cosine distance is defined as `1.0 - c` where `c` is the cosine
/// similarity, i.e. the dot product of the two vectors divided by the
/// product of their magnitudes. It lies in `[0, 2]`.
///
/// There is no guard against zero vectors. If either vector has zero
/// magnitude the result is `NaN`.
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
/// use vector_distances::vectors::cosine;
///
/// let x: Vec<f32> = vec![1.0, 0.0, 0.0];
/// let y: Vec<f32> = vec![0.0, 1.0, 0.0];
///
/// assert_eq!(cosine(&x, &y), Ok(1.0));
///
/// let z: Vec<f32> = vec![0.0, 0.0, 0.0];
/// assert!(cosine(&x, &z).map_or(false, f32::is_nan));
/// ```
///
/// # References
///
/// * [Cosine similarity](https://en.wikipedia.org/wiki/Cosine_similarity)
pub fn cosine<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    let [xx, yy, xy] = pairs(x, y)?.fold([T::ZERO; 3], |[xx, yy, xy], (a, b)| {
        [xx + a * a, yy + b * b, xy + a * b]
    });

    Ok(T::ONE - xy / (xx * yy).sqrt())
}
