//! Runtime configuration: parallel execution thresholds.

pub mod options;
pub use options::*;
