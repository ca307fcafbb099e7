//! The `Float` trait is used to represent the scalars in a vector.
//!
//! We provide implementations for `f32` and `f64`. Distances are returned
//! in the same type as the vector elements.

use core::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Sub},
};

/// Floating point types over which distances can be computed.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Positive infinity.
    const INFINITY: Self;

    /// Returns the absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns the square root.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns `self` raised to the power of `exp`.
    #[must_use]
    fn powf(self, exp: Self) -> Self;

    /// Returns the larger of two numbers.
    ///
    /// Unlike the IEEE `maxNum` of the primitive types, `NaN` is not
    /// discarded: `+inf` wins over everything, then `NaN` wins over any
    /// other value.
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// Casts a `usize` to `Self`. This may be a lossy conversion.
    fn from_usize(n: usize) -> Self;

    /// Casts an `f64` to `Self`. This may be a lossy conversion.
    fn from_f64(n: f64) -> Self;
}

/// Implements `Float` by forwarding to the inherent methods of the type.
macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const INFINITY: Self = <$ty>::INFINITY;

                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }

                fn powf(self, exp: Self) -> Self {
                    <$ty>::powf(self, exp)
                }

                #[allow(clippy::float_cmp)]
                fn max(self, other: Self) -> Self {
                    if self == <$ty>::INFINITY || other == <$ty>::INFINITY {
                        <$ty>::INFINITY
                    } else if self.is_nan() || other.is_nan() {
                        <$ty>::NAN
                    } else {
                        <$ty>::max(self, other)
                    }
                }

                #[allow(clippy::cast_precision_loss)]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }

                #[allow(clippy::cast_possible_truncation, trivial_numeric_casts)]
                fn from_f64(n: f64) -> Self {
                    n as $ty
                }
            }
        )*
    }
}

impl_float!(f32, f64);
