//! A `Metric` names one of the distance functions so that it can be chosen
//! at runtime, e.g. from a configuration file or a command line flag.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{vectors, Float, ParseMetricError, Result};

/// The available distance functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// See [`vectors::sq_euclidean`].
    SqEuclidean,
    /// See [`vectors::euclidean`].
    Euclidean,
    /// See [`vectors::city_block`].
    CityBlock,
    /// See [`vectors::chebyshev`].
    Chebyshev,
    /// See [`vectors::minkowski`]. Holds the order `p`.
    Minkowski(f64),
    /// See [`vectors::hamming`].
    Hamming,
    /// See [`vectors::cosine`].
    Cosine,
    /// See [`vectors::jaccard`].
    Jaccard,
}

impl Metric {
    /// Returns the name of the metric.
    ///
    /// The Minkowski exponent is not part of the name. Use the `Display`
    /// implementation to get a string that round-trips through `FromStr`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SqEuclidean => "sq_euclidean",
            Self::Euclidean => "euclidean",
            Self::CityBlock => "city_block",
            Self::Chebyshev => "chebyshev",
            Self::Minkowski(_) => "minkowski",
            Self::Hamming => "hamming",
            Self::Cosine => "cosine",
            Self::Jaccard => "jaccard",
        }
    }

    /// Computes the distance between `x` and `y` with this metric.
    ///
    /// The Minkowski order is stored as an `f64` and cast to `T`. For `f32`
    /// vectors, any order larger than `f32::MAX` becomes `+inf`, so the
    /// distance is computed as Chebyshev.
    ///
    /// # Errors
    ///
    /// * [`DimensionMismatch`](crate::DistanceError::DimensionMismatch) if
    ///   `x` and `y` have different lengths.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector_distances::Metric;
    ///
    /// let metric: Metric = "minkowski:inf".parse().unwrap();
    ///
    /// let x: Vec<f64> = vec![4.0, 5.0, 6.0, 7.0];
    /// let y: Vec<f64> = vec![3.0, 9.0, 8.0, 1.0];
    ///
    /// assert_eq!(metric.distance(&x, &y), Ok(6.0));
    /// ```
    pub fn distance<T: Float>(&self, x: &[T], y: &[T]) -> Result<T> {
        match *self {
            Self::SqEuclidean => vectors::sq_euclidean(x, y),
            Self::Euclidean => vectors::euclidean(x, y),
            Self::CityBlock => vectors::city_block(x, y),
            Self::Chebyshev => vectors::chebyshev(x, y),
            Self::Minkowski(p) => vectors::minkowski(x, y, T::from_f64(p)),
            Self::Hamming => vectors::hamming(x, y),
            Self::Cosine => vectors::cosine(x, y),
            Self::Jaccard => vectors::jaccard(x, y),
        }
    }

    /// Whether the metric satisfies the triangle inequality.
    ///
    /// The squared Euclidean and cosine distances do not, and neither does
    /// the Minkowski distance of order less than one.
    #[must_use]
    pub fn obeys_triangle_inequality(&self) -> bool {
        match *self {
            Self::SqEuclidean | Self::Cosine => false,
            Self::Minkowski(p) => p >= 1.0,
            Self::Euclidean | Self::CityBlock | Self::Chebyshev | Self::Hamming | Self::Jaccard => true,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minkowski(p) => write!(f, "{}:{p}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((name, p)) = trimmed.split_once(':') {
            if name.trim().eq_ignore_ascii_case("minkowski") {
                let p = p.trim();
                return p
                    .parse::<f64>()
                    .map(Self::Minkowski)
                    .map_err(|_| ParseMetricError::Exponent(p.to_string()));
            }
        }

        match trimmed.to_lowercase().as_str() {
            "sq_euclidean" | "sqeuclidean" => Ok(Self::SqEuclidean),
            "euclidean" => Ok(Self::Euclidean),
            "city_block" | "cityblock" | "manhattan" => Ok(Self::CityBlock),
            "chebyshev" => Ok(Self::Chebyshev),
            "hamming" => Ok(Self::Hamming),
            "cosine" => Ok(Self::Cosine),
            "jaccard" => Ok(Self::Jaccard),
            _ => Err(ParseMetricError::Unknown(trimmed.to_string())),
        }
    }
}
