use blackjack::shoe::{self, Shoe};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{IllegalMovePolicy, TableConfig};
use crate::round::{MoveOutcome, Phase, RoundState};
use crate::settlement::{settle_round, HandResult};
use crate::strategy::{DealerRule, Strategy};
use crate::TableError;

/// What happened in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub shuffled: bool,
    pub results: Vec<HandResult>,
    pub net: i64,
    pub balance: i64,
}

/// A single-player session: one shoe, one balance, many rounds.
///
/// The shoe and balance carry over between rounds. A `Game` is owned by one
/// session and must not be shared.
pub struct Game {
    config: TableConfig,
    round: RoundState,
    dealer: DealerRule,
    rng: ChaCha8Rng,
    balance: i64,
    rounds_played: usize,
}

impl Game {
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            config,
            // Empty, so the first round always builds a fresh shoe.
            round: RoundState::new(Shoe::default()),
            dealer: DealerRule,
            rng,
            balance: 0,
            rounds_played: 0,
        })
    }

    /// Start from a prepared shoe. It is used until it drops below the
    /// reshuffle threshold.
    pub fn with_shoe(config: TableConfig, shoe: Shoe) -> Result<Self, TableError> {
        let mut game = Self::new(config)?;
        game.round.replace_shoe(shoe);
        Ok(game)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Play `config.rounds` rounds and return the final balance.
    pub fn play<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> Result<i64, TableError> {
        log::info!(
            "Starting session: {} decks, {} rounds, blackjack pays {}",
            self.config.decks,
            self.config.rounds,
            self.config.blackjack_payout
        );
        for _ in 0..self.config.rounds {
            self.play_round(strategy)?;
        }
        log::info!(
            "Session finished after {} rounds with balance {}",
            self.rounds_played,
            self.balance
        );
        Ok(self.balance)
    }

    /// Reshuffle if needed, take a bet, deal, play every hand, settle.
    ///
    /// A fatal error leaves the balance untouched for the round in flight.
    pub fn play_round<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> Result<RoundReport, TableError> {
        let shuffled = self.reshuffle_if_needed();

        let bet = strategy.bet(shuffled);
        self.config.check_bet(bet)?;
        self.round.deal(bet)?;

        if self.round.dealer_has_blackjack() {
            log::debug!("Dealer has blackjack, skipping to settlement");
            self.round.end_turns();
        } else {
            self.play_player_turns(strategy)?;
            self.play_dealer_turn()?;
        }

        let (results, net) = settle_round(
            self.round.hands(),
            self.round.dealer(),
            self.config.blackjack_payout,
        )?;
        self.balance = self
            .balance
            .checked_add(net)
            .ok_or_else(|| TableError::overflow(format!("balance {} + {net}", self.balance)))?;
        self.rounds_played += 1;
        log::debug!(
            "Round {} settled: {:?}, net {}, balance {}",
            self.rounds_played,
            results.iter().map(|r| r.outcome).collect::<Vec<_>>(),
            net,
            self.balance
        );

        strategy.on_results(self.round.hands(), self.round.dealer());
        self.round.clear();

        Ok(RoundReport {
            shuffled,
            results,
            net,
            balance: self.balance,
        })
    }

    fn reshuffle_if_needed(&mut self) -> bool {
        if self.round.shoe().len() >= self.config.reshuffle_threshold() {
            return false;
        }

        let shoe = Shoe::new([
            shoe::deck(self.config.decks),
            shoe::shuffle_with(&mut self.rng),
        ]);
        log::debug!(
            "Reshuffled: {} cards left, new shoe of {}",
            self.round.shoe().len(),
            shoe.len()
        );
        self.round.replace_shoe(shoe);
        true
    }

    fn play_player_turns<S: Strategy + ?Sized>(
        &mut self,
        strategy: &mut S,
    ) -> Result<(), TableError> {
        let upcard = self
            .round
            .dealer_upcard()
            .ok_or_else(|| TableError::illegal("dealer has no upcard"))?;
        let mut rejections = 0;

        while self.round.phase() == Phase::PlayerTurn {
            let index = self.round.active_index();
            let mv = match self.round.current_hand() {
                Some(hand) => strategy.choose_move(&hand.cards, upcard),
                None => return Err(TableError::illegal("no player hand is acting")),
            };

            match self.round.apply(mv) {
                Ok(MoveOutcome::Continue) => {
                    rejections = 0;
                    log::debug!("Hand {index}: {mv}");
                }
                Ok(MoveOutcome::Busted) => {
                    rejections = 0;
                    log::debug!("Hand {index}: {mv}, busted");
                    self.round.stand()?;
                }
                Err(TableError::IllegalMove(reason)) => match self.config.illegal_move_policy {
                    IllegalMovePolicy::Fatal => return Err(TableError::IllegalMove(reason)),
                    IllegalMovePolicy::Reprompt => {
                        rejections += 1;
                        log::warn!("Hand {index}: rejected {mv} ({reason})");
                        if rejections >= self.config.max_reprompts {
                            log::warn!("Hand {index}: standing after {rejections} rejected moves");
                            self.round.stand()?;
                            rejections = 0;
                        }
                    }
                },
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn play_dealer_turn(&mut self) -> Result<(), TableError> {
        let upcard = self
            .round
            .dealer_upcard()
            .ok_or_else(|| TableError::illegal("dealer has no upcard"))?;

        while self.round.phase() == Phase::DealerTurn {
            let mv = self.dealer.choose_move(self.round.dealer(), upcard);
            if self.round.apply(mv)? == MoveOutcome::Busted {
                log::debug!("Dealer busted");
                self.round.stand()?;
            }
        }
        Ok(())
    }
}
