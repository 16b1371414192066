use blackjack::{is_blackjack, is_busted, Card, Hand, Move, Shoe};
use serde::{Deserialize, Serialize};

use crate::TableError;

/// Current phase of the round. Only ever moves forward until the next deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    HandOver,
}

/// Result of a move that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    /// The acting hand went over 21; its turn must end now.
    Busted,
}

/// The shoe, the dealer's cards and the player's hands for one round.
///
/// Player hands are addressed by position: a split inserts the new hand right
/// after the acting one, and `active` walks forward as each hand finishes.
/// The shoe outlives the round and is only swapped out on reshuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    shoe: Shoe,
    dealer: Vec<Card>,
    hands: Vec<Hand>,
    active: usize,
    phase: Phase,
}

impl RoundState {
    pub fn new(shoe: Shoe) -> Self {
        Self {
            shoe,
            dealer: Vec::new(),
            hands: Vec::new(),
            active: 0,
            phase: Phase::HandOver,
        }
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn replace_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dealer(&self) -> &[Card] {
        &self.dealer
    }

    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.first().copied()
    }

    pub fn dealer_has_blackjack(&self) -> bool {
        is_blackjack(&self.dealer)
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The player hand currently acting, if the round is in the player phase.
    pub fn current_hand(&self) -> Option<&Hand> {
        match self.phase {
            Phase::PlayerTurn => self.hands.get(self.active),
            _ => None,
        }
    }

    /// The cards of whichever side is acting.
    pub fn acting_cards(&self) -> Option<&[Card]> {
        match self.phase {
            Phase::PlayerTurn => self.hands.get(self.active).map(|h| h.cards.as_slice()),
            Phase::DealerTurn => Some(&self.dealer),
            Phase::HandOver => None,
        }
    }

    /// Start a round: one hand carrying `bet`, two cards each, player first.
    pub fn deal(&mut self, bet: i64) -> Result<(), TableError> {
        self.clear();
        self.hands.push(Hand::new(bet));
        for _ in 0..2 {
            let card = self.draw()?;
            self.hands[0].add_card(card);
            let card = self.draw()?;
            self.dealer.push(card);
        }
        self.phase = Phase::PlayerTurn;
        log::debug!(
            "Dealt player [{}] against dealer upcard {}",
            self.hands[0].to_display(),
            self.dealer[0].to_display()
        );
        Ok(())
    }

    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, TableError> {
        match mv {
            Move::Hit => self.hit(),
            Move::Stand => self.stand().map(|()| MoveOutcome::Continue),
            Move::Double => self.double(),
            Move::Split => self.split(),
        }
    }

    pub fn hit(&mut self) -> Result<MoveOutcome, TableError> {
        let busted = match self.phase {
            Phase::PlayerTurn => {
                let card = self.draw()?;
                let hand = self.active_hand_mut()?;
                hand.add_card(card);
                hand.is_busted()
            }
            Phase::DealerTurn => {
                let card = self.draw()?;
                self.dealer.push(card);
                is_busted(&self.dealer)
            }
            Phase::HandOver => return Err(TableError::illegal("no hand is in play")),
        };

        if busted {
            Ok(MoveOutcome::Busted)
        } else {
            Ok(MoveOutcome::Continue)
        }
    }

    pub fn stand(&mut self) -> Result<(), TableError> {
        match self.phase {
            Phase::PlayerTurn => {
                self.active += 1;
                if self.active >= self.hands.len() {
                    self.phase = Phase::DealerTurn;
                }
                Ok(())
            }
            Phase::DealerTurn => {
                self.phase = Phase::HandOver;
                Ok(())
            }
            Phase::HandOver => Err(TableError::illegal("no hand is in play")),
        }
    }

    /// Double the bet, take exactly one card, and stand whether or not it busted.
    pub fn double(&mut self) -> Result<MoveOutcome, TableError> {
        let hand = self.player_hand("double")?;
        if !hand.can_double() {
            return Err(TableError::illegal("can only double on a hand with two cards"));
        }
        let doubled_bet = hand
            .bet
            .checked_mul(2)
            .ok_or_else(|| TableError::overflow(format!("doubling a bet of {}", hand.bet)))?;
        if self.shoe.is_empty() {
            return Err(TableError::ShoeEmpty);
        }

        let hand = self.active_hand_mut()?;
        hand.bet = doubled_bet;
        hand.doubled = true;
        self.hit()?;
        self.stand()?;
        Ok(MoveOutcome::Continue)
    }

    /// Split a pair into two hands with equal bets; the new hand is played next.
    pub fn split(&mut self) -> Result<MoveOutcome, TableError> {
        let hand = self.player_hand("split")?;
        if hand.cards.len() != 2 {
            return Err(TableError::illegal("can only split a hand with two cards"));
        }
        if !hand.can_split() {
            return Err(TableError::illegal("both cards must have the same rank to split"));
        }

        let hand = self.active_hand_mut()?;
        let second = hand.cards[1];
        hand.cards.truncate(1);
        let new_hand = Hand::from_cards(vec![second], hand.bet);
        self.hands.insert(self.active + 1, new_hand);
        Ok(MoveOutcome::Continue)
    }

    /// Skip every remaining turn, e.g. when the dealer shows blackjack.
    pub fn end_turns(&mut self) {
        self.active = self.hands.len();
        self.phase = Phase::HandOver;
    }

    /// Drop all hands. The shoe is kept.
    pub fn clear(&mut self) {
        self.hands.clear();
        self.dealer.clear();
        self.active = 0;
        self.phase = Phase::HandOver;
    }

    fn draw(&mut self) -> Result<Card, TableError> {
        let card = self.shoe.draw()?;
        log::trace!("Drew {} ({} left)", card.to_display(), self.shoe.len());
        Ok(card)
    }

    fn player_hand(&self, action: &str) -> Result<&Hand, TableError> {
        if self.phase != Phase::PlayerTurn {
            return Err(TableError::illegal(format!(
                "cannot {action} outside the player's turn"
            )));
        }
        self.hands
            .get(self.active)
            .ok_or_else(|| TableError::illegal("no player hand is acting"))
    }

    fn active_hand_mut(&mut self) -> Result<&mut Hand, TableError> {
        self.hands
            .get_mut(self.active)
            .ok_or_else(|| TableError::illegal("no player hand is acting"))
    }
}
