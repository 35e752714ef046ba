//! Utilities shared by the execution layer.

pub mod partition;
