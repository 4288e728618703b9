use pinmark_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CidError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(#[from] TypeError),

    #[error("invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    #[error("unsupported multihash code: {0:#04x}")]
    UnsupportedCode(u8),

    #[error("invalid content identifier: {0}")]
    InvalidCid(String),
}

pub type CidResult<T> = Result<T, CidError>;
