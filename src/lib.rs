//! vctr: fixed-length numeric vectors with size-adaptive parallel kernels
//!
//! This crate provides an owned, fixed-length [`Vector`] type with bounds-checked
//! access, random-access cursors, elementwise arithmetic, dot products, norms and
//! normalization. Each arithmetic or reduction call runs sequentially on small
//! operands and on rayon worker partitions once the operand length exceeds a
//! configurable threshold (see [`Thresholds`]).

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use vector::*;
