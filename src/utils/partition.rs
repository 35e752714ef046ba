//! Index-range partitioning for the parallel executor.

/// Length of each chunk when `len` elements are split across `workers`.
///
/// Every chunk except possibly the last has exactly this length, so splitting
/// `0..len` with `chunks(chunk_len(len, workers))` gives at most `workers`
/// disjoint, contiguous, ordered partitions. Never returns 0, so it is always a
/// valid argument to `chunks`/`par_chunks`.
pub fn chunk_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}
