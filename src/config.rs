use blackjack::PayoutRatio;
use serde::{Deserialize, Serialize};

use crate::TableError;

/// What the round driver does when a strategy asks for a move the current
/// hand does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalMovePolicy {
    /// Log, ask again, and stand the hand after `max_reprompts` rejections.
    #[default]
    Reprompt,
    /// End the session with `TableError::IllegalMove`.
    Fatal,
}

/// Session configuration. Every field has a default, so an empty JSON object
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of decks in the shoe
    pub decks: usize,
    /// Rounds played by `Game::play`
    pub rounds: usize,
    /// Blackjack payout multiplier (commonly 3:2 or 6:5)
    pub blackjack_payout: PayoutRatio,
    /// Table minimum; bets below it end the session
    pub min_bet: Option<i64>,
    /// Seed for the session RNG; drawn from entropy when absent
    pub seed: Option<u64>,
    pub illegal_move_policy: IllegalMovePolicy,
    pub max_reprompts: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            decks: 3,
            rounds: 100,
            blackjack_payout: PayoutRatio::THREE_TO_TWO,
            min_bet: None,
            seed: None,
            illegal_move_policy: IllegalMovePolicy::Reprompt,
            max_reprompts: 3,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.decks == 0 {
            return Err(TableError::InvalidConfig(
                "Number of decks must be at least 1".to_string(),
            ));
        }
        if self.rounds == 0 {
            return Err(TableError::InvalidConfig(
                "Number of rounds must be at least 1".to_string(),
            ));
        }
        if self.blackjack_payout.denominator == 0 {
            return Err(TableError::InvalidConfig(
                "Blackjack payout denominator cannot be zero".to_string(),
            ));
        }
        if let Some(min) = self.min_bet {
            if min <= 0 {
                return Err(TableError::InvalidConfig(format!(
                    "Minimum bet must be positive, got {min}"
                )));
            }
        }
        Ok(())
    }

    /// Cards in a freshly built shoe.
    pub fn shoe_size(&self) -> usize {
        blackjack::shoe::DECK_SIZE * self.decks
    }

    /// The shoe is rebuilt before a deal once fewer cards than this remain.
    pub fn reshuffle_threshold(&self) -> usize {
        self.shoe_size() / 3
    }

    pub fn check_bet(&self, bet: i64) -> Result<(), TableError> {
        if bet <= 0 {
            return Err(TableError::InvalidBet(bet));
        }
        match self.min_bet {
            Some(min) if bet < min => Err(TableError::BetBelowMinimum { bet, min }),
            _ => Ok(()),
        }
    }
}
