use boolgate_backend::Degree;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GateError {
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch { expected: Vec<usize>, found: Vec<usize> },
    #[error("LWE dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: Degree, found: Degree },
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}
