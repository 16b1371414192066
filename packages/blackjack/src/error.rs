use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Shoe is empty")]
    ShoeEmpty,
    #[error("Unknown move: {0}")]
    UnknownMove(String),
    #[error("Invalid payout ratio: {0}")]
    InvalidPayout(String),
}
