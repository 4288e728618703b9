use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] pinmark_types::TypeError),

    #[error("content identifier error: {0}")]
    Cid(#[from] pinmark_cid::CidError),

    #[error("verification data error: {0}")]
    Proof(#[from] pinmark_proof::ProofError),

    #[error("amount error: {0}")]
    Amount(#[from] pinmark_units::UnitError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
