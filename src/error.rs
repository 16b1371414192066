use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Shoe ran out of cards mid-round")]
    ShoeEmpty,

    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Bet must be positive, got {0}")]
    InvalidBet(i64),

    #[error("Bet {bet} is below the table minimum of {min}")]
    BetBelowMinimum { bet: i64, min: i64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Amount overflow: {0}")]
    Overflow(String),
}

impl TableError {
    pub fn illegal(reason: impl Into<String>) -> Self {
        TableError::IllegalMove(reason.into())
    }

    pub fn overflow(what: impl Into<String>) -> Self {
        TableError::Overflow(what.into())
    }
}

impl From<blackjack::Error> for TableError {
    fn from(err: blackjack::Error) -> Self {
        match err {
            blackjack::Error::ShoeEmpty => TableError::ShoeEmpty,
            blackjack::Error::UnknownMove(mv) => {
                TableError::IllegalMove(format!("unknown move '{mv}'"))
            }
            blackjack::Error::InvalidPayout(msg) => TableError::InvalidConfig(msg),
        }
    }
}
