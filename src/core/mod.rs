//! Core element traits and the free functions over vectors.

pub mod traits;
pub use traits::{Numeric, Scalar};
pub mod products;
pub use products::*;
