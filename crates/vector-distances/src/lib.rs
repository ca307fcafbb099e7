#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod error;
pub mod metric;
pub mod number;
pub mod vectors;

pub use error::{DistanceError, ParseMetricError, Result};
pub use metric::Metric;
pub use number::Float;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
