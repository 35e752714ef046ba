use thiserror::Error;

// Unified error type for vctr

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VError {
    #[error("index {index} out of bounds for a vector of {dimensions} dimensions")]
    OutOfBounds { index: usize, dimensions: usize },
    #[error("unequal vector sizes: {left} and {right}")]
    SizeMismatch { left: usize, right: usize },
    #[error("cannot dot product null vectors")]
    EmptyOperand,
    #[error("cannot normalize a vector of zero magnitude")]
    DegenerateVector,
    #[error("scaling by {factor} produced a value the element type cannot represent")]
    Unrepresentable { factor: f64 },
}

impl VError {
    /// Fails with `SizeMismatch` unless both lengths agree.
    pub(crate) fn check_sizes(left: usize, right: usize) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            Err(VError::SizeMismatch { left, right })
        }
    }
}
