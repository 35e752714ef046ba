//! Inner products and normalization over [`Vector`]s.
//!
//! These work purely through the public `Vector` API: lengths, slices and the
//! threshold-dispatched reductions.

use crate::config::Thresholds;
use crate::core::traits::Scalar;
use crate::error::{Result, VError};
use crate::parallel::{Exec, Executor};
use crate::vector::Vector;

/// Computes `sum(a[i] * b[i])` in the element type.
///
/// Fails with `SizeMismatch` for unequal lengths and `EmptyOperand` when both are
/// empty. Above the dot-product threshold the sum is computed per partition and
/// the partial sums are added in partition order; for floating-point elements
/// this may differ from the sequential sum by rounding. Products and sums use
/// `T`'s own arithmetic, so integer overflow panics in debug builds and wraps in
/// release builds.
pub fn dot_product<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    dot_product_with(a, b, &Thresholds::default())
}

pub fn dot_product_with<T: Scalar>(a: &Vector<T>, b: &Vector<T>, thresholds: &Thresholds) -> Result<T> {
    VError::check_sizes(a.dimensions(), b.dimensions())?;
    if a.is_empty() {
        return Err(VError::EmptyOperand);
    }
    let exec = Exec::select("dot_product", a.dimensions(), thresholds.dot_product);
    Ok(exec.zip_sum(a.as_slice(), b.as_slice(), |x, y| x * y))
}

/// `dot_product(a, b) == 0`, compared exactly: no epsilon is applied, so nearly
/// perpendicular floating-point vectors report `false`.
pub fn are_perpendicular<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<bool> {
    are_perpendicular_with(a, b, &Thresholds::default())
}

pub fn are_perpendicular_with<T: Scalar>(a: &Vector<T>, b: &Vector<T>, thresholds: &Thresholds) -> Result<bool> {
    Ok(dot_product_with(a, b, thresholds)? == T::zero())
}

/// A copy of `v` scaled by `1 / |v|`.
///
/// Fails with `DegenerateVector` when the magnitude is zero (including the empty
/// vector) or not finite, instead of producing NaN or infinite components.
pub fn unit_vector<T: Scalar>(v: &Vector<T>) -> Result<Vector<T>> {
    unit_vector_with(v, &Thresholds::default())
}

pub fn unit_vector_with<T: Scalar>(v: &Vector<T>, thresholds: &Thresholds) -> Result<Vector<T>> {
    let magnitude = v.magnitude_with(thresholds);
    if magnitude == 0.0 || !magnitude.is_finite() {
        return Err(VError::DegenerateVector);
    }
    let mut unit = v.clone();
    unit.scale_with(1.0 / magnitude, thresholds)?;
    Ok(unit)
}
