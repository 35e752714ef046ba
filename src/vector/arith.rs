//! Elementwise arithmetic and norms for [`Vector`].
//!
//! Every operation checks its preconditions before allocating or mutating, then
//! picks an executor from the operand length and the matching [`Thresholds`]
//! entry. The sequential and parallel executors run the same kernel, so the
//! result does not depend on which one was chosen (up to floating-point
//! reassociation of partial sums in reductions).

use std::ops::{Add, Sub};

use super::Vector;
use crate::config::Thresholds;
use crate::core::traits::Scalar;
use crate::error::{Result, VError};
use crate::parallel::{Exec, Executor};

impl<T: Scalar> Vector<T> {
    /// Elementwise `self + rhs`.
    ///
    /// Elements are added with `T`'s own `+`, so integer overflow panics in debug
    /// builds and wraps in release builds.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.add_with(rhs, &Thresholds::default())
    }

    pub fn add_with(&self, rhs: &Self, thresholds: &Thresholds) -> Result<Self> {
        self.zip_with("add", rhs, thresholds.arithmetic, |a, b| a + b)
    }

    /// Elementwise `self - rhs`. Integer overflow behaves as for [`Vector::add`].
    pub fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.subtract_with(rhs, &Thresholds::default())
    }

    pub fn subtract_with(&self, rhs: &Self, thresholds: &Thresholds) -> Result<Self> {
        self.zip_with("subtract", rhs, thresholds.arithmetic, |a, b| a - b)
    }

    fn zip_with<F>(&self, op: &'static str, rhs: &Self, threshold: usize, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T + Send + Sync,
    {
        VError::check_sizes(self.dimensions(), rhs.dimensions())?;
        let n = self.dimensions();
        if n == 0 {
            return Ok(Self::default());
        }
        let exec = Exec::select(op, n, threshold);
        let mut out = vec![T::zero(); n];
        exec.zip_map(&self.data, &rhs.data, &mut out, f);
        Ok(out.into())
    }

    /// Euclidean norm `sqrt(sum(x_i^2))`, accumulated in `f64`. Zero for an empty vector.
    pub fn magnitude(&self) -> f64 {
        self.magnitude_with(&Thresholds::default())
    }

    pub fn magnitude_with(&self, thresholds: &Thresholds) -> f64 {
        let exec = Exec::select("magnitude", self.dimensions(), thresholds.magnitude);
        exec.map_sum(&self.data, |x| {
            let x = x.to_accumulator();
            x * x
        })
        .sqrt()
    }

    /// Multiply every element by `factor` in place.
    ///
    /// Integer elements are multiplied exactly when `factor` is a whole number
    /// that fits in `T`; otherwise each product is computed in `f64` and truncated
    /// toward zero. If any product is not representable in `T` the vector is left
    /// untouched and `Unrepresentable` is returned.
    pub fn scale(&mut self, factor: f64) -> Result<()> {
        self.scale_with(factor, &Thresholds::default())
    }

    pub fn scale_with(&mut self, factor: f64, thresholds: &Thresholds) -> Result<()> {
        let exec = Exec::select("scale", self.dimensions(), thresholds.scale);
        let scaled = exec
            .try_map(&self.data, |x| x.scale_by(factor))
            .ok_or(VError::Unrepresentable { factor })?;
        self.data = scaled.into_boxed_slice();
        Ok(())
    }
}

/// `&a + &b`, same as [`Vector::add`].
impl<T: Scalar> Add for &Vector<T> {
    type Output = Result<Vector<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::add(self, rhs)
    }
}

/// `&a - &b`, same as [`Vector::subtract`].
impl<T: Scalar> Sub for &Vector<T> {
    type Output = Result<Vector<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}
