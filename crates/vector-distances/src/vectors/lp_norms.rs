//! Provides functions for calculating Lp-norms between two vectors.

use super::utils::pairs;
use crate::{Float, Result};

/// Computes the squared Euclidean distance between two vectors.
///
/// This is the sum of the squared differences between corresponding
/// elements. It does not satisfy the triangle inequality.
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
/// use vector_distances::vectors::sq_euclidean;
///
/// let x: Vec<f64> = vec![4.0, 5.0, 6.0, 7.0];
/// let y: Vec<f64> = vec![3.0, 9.0, 8.0, 1.0];
///
/// assert_eq!(sq_euclidean(&x, &y), Ok(57.0));
/// ```
///
/// # References
///
/// * [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance#Squared_Euclidean_distance)
pub fn sq_euclidean<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    Ok(pairs(x, y)?
        .map(|(a, b)| a - b)
        .fold(T::ZERO, |acc, d| acc + d * d))
}

/// Computes the Euclidean distance between two vectors.
///
/// This is the square root of [`sq_euclidean`].
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
/// use vector_distances::vectors::euclidean;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 6.0, 3.0];
///
/// assert_eq!(euclidean(&x, &y), Ok(5.0));
/// ```
///
/// # References
///
/// * [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance)
pub fn euclidean<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    sq_euclidean(x, y).map(Float::sqrt)
}

/// Computes the City Block (Manhattan) distance between two vectors.
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
/// use vector_distances::vectors::city_block;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![4.0, 5.0, 6.0];
///
/// assert_eq!(city_block(&x, &y), Ok(9.0));
/// ```
///
/// # References
///
/// * [Taxicab geometry](https://en.wikipedia.org/wiki/Taxicab_geometry)
pub fn city_block<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    Ok(pairs(x, y)?.fold(T::ZERO, |acc, (a, b)| acc + (a - b).abs()))
}

/// Computes the Chebyshev distance between two vectors.
///
/// This is the largest absolute difference between corresponding elements.
/// The running maximum starts at zero, so the result is never negative.
/// A `NaN` difference makes the result `NaN` unless another difference is
/// infinite, in which case the result is `+inf`.
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
/// use vector_distances::vectors::chebyshev;
///
/// let x: Vec<f32> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f32> = vec![6.0, 5.0, 4.0];
///
/// assert_eq!(chebyshev(&x, &y), Ok(5.0));
/// ```
///
/// # References
///
/// * [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance)
pub fn chebyshev<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    Ok(pairs(x, y)?.fold(T::ZERO, |acc, (a, b)| acc.max((a - b).abs())))
}

/// Computes the Minkowski distance of order `p` between two vectors.
///
/// For `p = +inf` this is exactly [`chebyshev`]. Otherwise it is
/// `(Σ |x_i - y_i|^p)^(1/p)`.
///
/// `p` is not validated. Zero or negative exponents follow IEEE 754
/// semantics and may produce `NaN` or infinite values.
///
/// # Arguments
///
/// * `x`: A slice of floats.
/// * `y`: A slice of floats.
/// * `p`: The order of the norm.
///
/// # Errors
///
/// * [`DimensionMismatch`](crate::DistanceError::DimensionMismatch) if `x`
///   and `y` have different lengths.
///
/// # Examples
///
/// ```
/// use vector_distances::vectors::minkowski;
///
/// let x: Vec<f64> = vec![4.0, 5.0, 6.0, 7.0];
/// let y: Vec<f64> = vec![3.0, 9.0, 8.0, 1.0];
///
/// assert_eq!(minkowski(&x, &y, 1.0), Ok(13.0));
/// assert_eq!(minkowski(&x, &y, f64::INFINITY), Ok(6.0));
/// ```
///
/// # References
///
/// * [Minkowski distance](https://en.wikipedia.org/wiki/Minkowski_distance)
#[allow(clippy::float_cmp)]
pub fn minkowski<T: Float>(x: &[T], y: &[T], p: T) -> Result<T> {
    let pairs = pairs(x, y)?;

    if p == T::INFINITY {
        ftlog::trace!("Minkowski distance with infinite order, using Chebyshev.");
        return chebyshev(x, y);
    }

    let total = pairs.fold(T::ZERO, |acc, (a, b)| acc + (a - b).abs().powf(p));
    Ok(total.powf(T::ONE / p))
}
