use nalgebra::Vector3;

/// Errors when constructing a field
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Every axis needs at least one sample.
    #[error("field dimensions must be positive, got {0:?}")]
    ZeroDimension(Vector3<usize>),
    /// Number of samples does not match the dimensions.
    #[error("expected {expected} samples, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },
}
