//! Distance functions for vectors.
//!
//! Every function takes two slices of the same length and returns a
//! [`Result`](crate::Result). When the lengths differ, the function returns
//! [`DimensionMismatch`](crate::DistanceError::DimensionMismatch) carrying
//! both lengths, and nothing is computed.
//!
//! # Potentially unexpected behaviors
//!
//! Numeric edge cases are not errors. The cosine distance involving a zero
//! vector is `NaN`, the Jaccard distance between two empty vectors is `NaN`,
//! and a Minkowski distance with a zero or negative exponent follows IEEE 754
//! semantics.

mod angular;
mod categorical;
mod lp_norms;
pub(crate) mod utils;

pub use angular::cosine;
pub use categorical::{hamming, jaccard};
pub use lp_norms::{chebyshev, city_block, euclidean, minkowski, sq_euclidean};
