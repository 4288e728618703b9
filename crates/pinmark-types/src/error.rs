use thiserror::Error;

/// Errors produced by type and encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

pub type TypeResult<T> = Result<T, TypeError>;
