use std::error::Error;

use crate::verifier::VerificationError;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("{gate}: output shape {found:?} does not match input shape {expected:?}")]
    ShapeMismatch {
        gate: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    #[error("case failed: {0}")]
    CaseFailure(#[from] VerificationError),
    #[error("gate library error: {0}")]
    Library(#[source] Box<dyn Error + Send + Sync>),
}

impl HarnessError {
    pub fn library<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        HarnessError::Library(Box::new(err))
    }
}
