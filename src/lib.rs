pub mod config;
pub mod counting;
pub mod error;
pub mod round;
pub mod session;
pub mod settlement;
pub mod strategy;

pub use crate::config::{IllegalMovePolicy, TableConfig};
pub use crate::counting::CardCounter;
pub use crate::error::TableError;
pub use crate::round::{MoveOutcome, Phase, RoundState};
pub use crate::session::{Game, RoundReport};
pub use crate::settlement::{settle_hand, settle_round, HandResult};
pub use crate::strategy::{DealerRule, ScriptedStrategy, Strategy};
