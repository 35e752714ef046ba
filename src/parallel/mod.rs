//! Execution strategies for elementwise and reduction kernels.
//!
//! Every kernel exists once, in [`Serial`]. The rayon executor partitions the index
//! range into disjoint contiguous chunks and runs that same kernel on each chunk, so
//! the choice of executor never changes what is computed, only where.

use crate::core::traits::Scalar;

pub trait Executor {
    /// Number of partitions work is split into.
    fn workers(&self) -> usize;
    /// `out[i] = f(a[i], b[i])` for every index. All three slices have equal length.
    fn zip_map<T, F>(&self, a: &[T], b: &[T], out: &mut [T], f: F)
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync;
    /// Sum of `f(a[i], b[i])`, starting from `T::zero()`.
    fn zip_sum<T, F>(&self, a: &[T], b: &[T], f: F) -> T
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync;
    /// Sum of `f(a[i])` in the `f64` accumulator.
    fn map_sum<T, F>(&self, a: &[T], f: F) -> f64
    where
        T: Scalar,
        F: Fn(T) -> f64 + Send + Sync;
    /// `f` applied to every element, or `None` if any application fails.
    fn try_map<T, F>(&self, a: &[T], f: F) -> Option<Vec<T>>
    where
        T: Scalar,
        F: Fn(T) -> Option<T> + Send + Sync;
}

/// Single-threaded executor; also the per-partition kernel of every other executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serial;

impl Executor for Serial {
    fn workers(&self) -> usize {
        1
    }
    fn zip_map<T, F>(&self, a: &[T], b: &[T], out: &mut [T], f: F)
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        debug_assert_eq!(a.len(), b.len());
        debug_assert_eq!(a.len(), out.len());
        for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
            *o = f(x, y);
        }
    }
    fn zip_sum<T, F>(&self, a: &[T], b: &[T], f: F) -> T
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b)
            .fold(T::zero(), |acc, (&x, &y)| acc + f(x, y))
    }
    fn map_sum<T, F>(&self, a: &[T], f: F) -> f64
    where
        T: Scalar,
        F: Fn(T) -> f64 + Send + Sync,
    {
        a.iter().fold(0.0, |acc, &x| acc + f(x))
    }
    fn try_map<T, F>(&self, a: &[T], f: F) -> Option<Vec<T>>
    where
        T: Scalar,
        F: Fn(T) -> Option<T> + Send + Sync,
    {
        a.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(feature = "rayon")]
pub mod rayon_exec;
#[cfg(feature = "rayon")]
pub use rayon_exec::RayonExec;

/// The executor picked for one call.
#[derive(Debug, Clone, Copy)]
pub enum Exec {
    Serial(Serial),
    #[cfg(feature = "rayon")]
    Rayon(RayonExec),
}

impl Exec {
    /// Parallel iff `len > threshold` (and the `rayon` feature is on).
    pub fn select(op: &'static str, len: usize, threshold: usize) -> Self {
        #[cfg(feature = "rayon")]
        {
            if len > threshold {
                let exec = Exec::Rayon(RayonExec::new());
                log::trace!("{op}: {len} elements > threshold {threshold}, using {exec:?}");
                return exec;
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = threshold;
        log::trace!("{op}: {len} elements, using sequential executor");
        Exec::Serial(Serial)
    }

    pub fn is_parallel(&self) -> bool {
        match self {
            Exec::Serial(_) => false,
            #[cfg(feature = "rayon")]
            Exec::Rayon(_) => true,
        }
    }
}

impl Executor for Exec {
    fn workers(&self) -> usize {
        match self {
            Exec::Serial(e) => e.workers(),
            #[cfg(feature = "rayon")]
            Exec::Rayon(e) => e.workers(),
        }
    }
    fn zip_map<T, F>(&self, a: &[T], b: &[T], out: &mut [T], f: F)
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        match self {
            Exec::Serial(e) => e.zip_map(a, b, out, f),
            #[cfg(feature = "rayon")]
            Exec::Rayon(e) => e.zip_map(a, b, out, f),
        }
    }
    fn zip_sum<T, F>(&self, a: &[T], b: &[T], f: F) -> T
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        match self {
            Exec::Serial(e) => e.zip_sum(a, b, f),
            #[cfg(feature = "rayon")]
            Exec::Rayon(e) => e.zip_sum(a, b, f),
        }
    }
    fn map_sum<T, F>(&self, a: &[T], f: F) -> f64
    where
        T: Scalar,
        F: Fn(T) -> f64 + Send + Sync,
    {
        match self {
            Exec::Serial(e) => e.map_sum(a, f),
            #[cfg(feature = "rayon")]
            Exec::Rayon(e) => e.map_sum(a, f),
        }
    }
    fn try_map<T, F>(&self, a: &[T], f: F) -> Option<Vec<T>>
    where
        T: Scalar,
        F: Fn(T) -> Option<T> + Send + Sync,
    {
        match self {
            Exec::Serial(e) => e.try_map(a, f),
            #[cfg(feature = "rayon")]
            Exec::Rayon(e) => e.try_map(a, f),
        }
    }
}
