//! Execution thresholds for the vector kernels.
//!
//! Each kernel family (elementwise arithmetic, dot product, magnitude, scaling)
//! has its own length threshold. An operation whose operand length is strictly
//! greater than its threshold runs on the partitioned parallel executor; anything
//! at or below it runs sequentially. Both paths compute the same result, so the
//! thresholds only ever trade latency for throughput.

/// Arithmetic (`add`, `subtract`) goes parallel above this many elements.
pub const PARALLEL_THRESHOLD_ARITHMETIC: usize = 1000;
/// Dot products go parallel above this many elements.
pub const PARALLEL_THRESHOLD_DOT_PRODUCT: usize = 1000;
/// Magnitude goes parallel above this many elements.
pub const PARALLEL_THRESHOLD_MAGNITUDE: usize = 1000;
/// In-place scaling goes parallel above this many elements.
pub const PARALLEL_THRESHOLD_SCALE: usize = 1000;

/// Per-operation parallel thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Threshold for elementwise add/subtract
    pub arithmetic: usize,

    /// Threshold for dot products
    pub dot_product: usize,

    /// Threshold for the sum-of-squares reduction behind `magnitude`
    pub magnitude: usize,

    /// Threshold for `scale`
    pub scale: usize,
}

impl Thresholds {
    /// Thresholds that keep every operation on the sequential path.
    pub const fn sequential() -> Self {
        Self::uniform(usize::MAX)
    }

    /// Thresholds that send every non-empty operation to the parallel path.
    pub const fn parallel() -> Self {
        Self::uniform(0)
    }

    /// The same threshold for every operation.
    pub const fn uniform(threshold: usize) -> Self {
        Self {
            arithmetic: threshold,
            dot_product: threshold,
            magnitude: threshold,
            scale: threshold,
        }
    }

    pub fn with_arithmetic(mut self, threshold: usize) -> Self {
        self.arithmetic = threshold;
        self
    }

    pub fn with_dot_product(mut self, threshold: usize) -> Self {
        self.dot_product = threshold;
        self
    }

    pub fn with_magnitude(mut self, threshold: usize) -> Self {
        self.magnitude = threshold;
        self
    }

    pub fn with_scale(mut self, threshold: usize) -> Self {
        self.scale = threshold;
        self
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            arithmetic: PARALLEL_THRESHOLD_ARITHMETIC,
            dot_product: PARALLEL_THRESHOLD_DOT_PRODUCT,
            magnitude: PARALLEL_THRESHOLD_MAGNITUDE,
            scale: PARALLEL_THRESHOLD_SCALE,
        }
    }
}
