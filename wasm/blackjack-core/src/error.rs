use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(String),
    #[error("Invalid seat: {0:?}")]
    InvalidSeat(String),
    #[error("Not applicable: {0}")]
    PreconditionViolation(&'static str),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
