use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: &'static str },
}

pub type UnitResult<T> = Result<T, UnitError>;

pub(crate) fn invalid(input: &str, reason: &'static str) -> UnitError {
    UnitError::InvalidAmount {
        input: input.to_owned(),
        reason,
    }
}
