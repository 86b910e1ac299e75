//! Error types for dapper-math

/// Errors produced by the decomposition, solver and ensemble helpers
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("Matrix is empty")]
    EmptyMatrix,

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Dimension mismatch: {message}")]
    DimensionMismatch { message: String },

    #[error("Input contains non-finite values")]
    NonFinite,

    #[error("SVD did not converge")]
    SvdNotConverged,

    #[error("Singular value {index} is zero, cannot invert")]
    ZeroSingularValue { index: usize },

    #[error("Matrix is singular")]
    SingularMatrix,

    #[error("Ensemble needs at least {required} members, got {actual}")]
    InsufficientMembers { required: usize, actual: usize },

    #[error("{value} is not close to an integer")]
    NotAnInteger { value: f64 },

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl MathError {
    pub(crate) fn dimension_mismatch(message: impl Into<String>) -> Self {
        MathError::DimensionMismatch {
            message: message.into(),
        }
    }
}
