use thiserror::Error;

/// vCard formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
