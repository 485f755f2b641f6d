use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("mismatch: {0}")]
    Mismatch(String),
    #[error("out of range: {0}")]
    OutOfRange(String),
    #[error("accuracy check failed: {0}")]
    Accuracy(String),
}

pub type DistResult<T> = Result<T, DistError>;
