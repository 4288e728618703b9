use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("malformed verification data: {0}")]
    MalformedInput(String),

    #[error("invalid length for {field}: expected {expected} bytes, got {actual}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type ProofResult<T> = Result<T, ProofError>;
