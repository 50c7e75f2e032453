use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuzzyError {
    #[error("unknown comparison option: {0}")]
    UnknownFlag(String),
    #[error("unknown tolerance band: {0}")]
    UnknownToleranceBand(String),
}

pub type Result<T> = std::result::Result<T, FuzzyError>;
