//! Core element traits for vctr.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use num_traits::{NumCast, Zero};

/// Primitive numeric conversions used by norms and scaling.
///
/// Implemented for every primitive integer and float type. Widening to `f64`
/// cannot fail for these (large integers round to the nearest `f64`).
pub trait Numeric: Sized {
    /// Widen to the `f64` accumulator used by norms.
    fn to_accumulator(self) -> f64;

    /// `self * factor`, or `None` if the product is not representable in `Self`.
    ///
    /// Integers multiply exactly (checked) when `factor` is a whole number that
    /// fits in the type; otherwise the product is taken in `f64` and truncated
    /// toward zero. Floats multiply in `f64` and never fail.
    fn scale_by(self, factor: f64) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn to_accumulator(self) -> f64 {
                self as f64
            }

            fn scale_by(self, factor: f64) -> Option<Self> {
                if factor.fract() == 0.0 {
                    if let Some(f) = <$t as NumCast>::from(factor) {
                        return self.checked_mul(f);
                    }
                }
                <$t as NumCast>::from(self as f64 * factor)
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn to_accumulator(self) -> f64 {
                self as f64
            }

            fn scale_by(self, factor: f64) -> Option<Self> {
                Some((self as f64 * factor) as $t)
            }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Element type of a [`Vector`](crate::Vector).
///
/// Anything that adds, subtracts, multiplies, compares for equality and has
/// [`Numeric`] conversions qualifies. `Send + Sync` lets the parallel executor
/// share operand slices across workers.
pub trait Scalar:
    Copy
    + Send
    + Sync
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Zero
    + Numeric
{
}

impl<T> Scalar for T where
    T: Copy
        + Send
        + Sync
        + PartialEq
        + Debug
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Zero
        + Numeric
{
}
