use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown output mode: {0}")]
    UnknownOutputMode(String),
    #[error("unknown amplitude conversion: {0}")]
    UnknownAmplitudeConversion(String),
    #[error("unknown time info flag: {0:?}")]
    UnknownTimeInfo(char),
}

pub type Result<T> = std::result::Result<T, ModelError>;
