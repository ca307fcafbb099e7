//! Error types for the distance functions.

use thiserror::Error;

/// A `Result` whose error is a [`DistanceError`].
pub type Result<T> = core::result::Result<T, DistanceError>;

/// Errors returned by the distance functions.
///
/// Numeric edge cases, e.g. the cosine distance to a zero vector, are not
/// errors. They come back as `NaN` or infinite values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// The two vectors do not have the same number of dimensions.
    #[error("first vector has length {first}, second has length {second}")]
    DimensionMismatch {
        /// Length of the first vector.
        first: usize,
        /// Length of the second vector.
        second: usize,
    },
}

impl DistanceError {
    /// Returns the lengths of the first and second vectors.
    #[must_use]
    pub const fn lengths(&self) -> (usize, usize) {
        match *self {
            Self::DimensionMismatch { first, second } => (first, second),
        }
    }
}

/// Errors from parsing a [`Metric`](crate::Metric) out of a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseMetricError {
    /// The name does not match any known metric.
    #[error("unknown metric: {0}")]
    Unknown(String),

    /// The exponent given for the Minkowski metric is not a number.
    #[error("invalid minkowski exponent: {0}")]
    Exponent(String),
}
