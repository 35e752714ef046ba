// rayon-based partitioned execution

use rayon::prelude::*;

use super::{Executor, Serial};
use crate::core::traits::Scalar;
use crate::utils::partition::chunk_len;

/// Splits each call into `workers` contiguous chunks and runs the [`Serial`]
/// kernel on every chunk from rayon's pool. Partial sums are combined on the
/// calling thread in partition order.
#[derive(Debug, Clone, Copy)]
pub struct RayonExec {
    workers: usize,
}

impl RayonExec {
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get())
    }

    pub fn with_workers(workers: usize) -> Self {
        RayonExec { workers: workers.max(1) }
    }
}

impl Default for RayonExec {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExec {
    fn workers(&self) -> usize {
        self.workers
    }
    fn zip_map<T, F>(&self, a: &[T], b: &[T], out: &mut [T], f: F)
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        debug_assert_eq!(a.len(), b.len());
        debug_assert_eq!(a.len(), out.len());
        let chunk = chunk_len(out.len(), self.workers());
        // each worker writes only its own slice of `out`
        out.par_chunks_mut(chunk)
            .zip(a.par_chunks(chunk))
            .zip(b.par_chunks(chunk))
            .for_each(|((o, x), y)| Serial.zip_map(x, y, o, &f));
    }
    fn zip_sum<T, F>(&self, a: &[T], b: &[T], f: F) -> T
    where
        T: Scalar,
        F: Fn(T, T) -> T + Send + Sync,
    {
        debug_assert_eq!(a.len(), b.len());
        let chunk = chunk_len(a.len(), self.workers());
        let partials: Vec<T> = a
            .par_chunks(chunk)
            .zip(b.par_chunks(chunk))
            .map(|(x, y)| Serial.zip_sum(x, y, &f))
            .collect();
        partials.into_iter().fold(T::zero(), |acc, p| acc + p)
    }
    fn map_sum<T, F>(&self, a: &[T], f: F) -> f64
    where
        T: Scalar,
        F: Fn(T) -> f64 + Send + Sync,
    {
        let chunk = chunk_len(a.len(), self.workers());
        let partials: Vec<f64> = a
            .par_chunks(chunk)
            .map(|x| Serial.map_sum(x, &f))
            .collect();
        partials.into_iter().sum()
    }
    fn try_map<T, F>(&self, a: &[T], f: F) -> Option<Vec<T>>
    where
        T: Scalar,
        F: Fn(T) -> Option<T> + Send + Sync,
    {
        let chunk = chunk_len(a.len(), self.workers());
        let parts: Option<Vec<Vec<T>>> = a
            .par_chunks(chunk)
            .map(|x| Serial.try_map(x, &f))
            .collect();
        Some(parts?.concat())
    }
}
