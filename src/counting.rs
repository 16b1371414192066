//! Hi-Lo card counting.
//!
//! The running count lives inside the strategy and is only updated from the
//! final hands passed to `on_results`. Bets ramp up with the true count and
//! play follows the basic strategy table.

use blackjack::{optimal_move, shoe::DECK_SIZE, Card, Hand, Move};

use crate::Strategy;

#[derive(Debug, Clone)]
pub struct CardCounter {
    decks: usize,
    unit: i64,
    running_count: i64,
    seen: usize,
}

impl CardCounter {
    pub fn new(decks: usize, unit: i64) -> Self {
        Self {
            decks,
            unit,
            running_count: 0,
            seen: 0,
        }
    }

    pub fn running_count(&self) -> i64 {
        self.running_count
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Running count per whole deck left in the shoe.
    pub fn true_count(&self) -> i64 {
        let remaining = (self.decks * DECK_SIZE).saturating_sub(self.seen) / DECK_SIZE;
        self.running_count / remaining.max(1) as i64
    }

    fn count(&mut self, card: &Card) {
        match card.upcard_value() {
            10 | 11 => self.running_count -= 1,
            2..=6 => self.running_count += 1,
            _ => {}
        }
        self.seen += 1;
    }

    fn reset(&mut self) {
        self.running_count = 0;
        self.seen = 0;
    }
}

impl Strategy for CardCounter {
    fn bet(&mut self, shuffled: bool) -> i64 {
        if shuffled {
            self.reset();
        }

        match self.true_count() {
            tc if tc >= 14 => self.unit * 100,
            tc if tc > 8 => self.unit * 5,
            _ => self.unit,
        }
    }

    fn choose_move(&mut self, hand: &[Card], dealer_upcard: Card) -> Move {
        let can_double = hand.len() == 2;
        let can_split = hand.len() == 2 && hand[0].rank == hand[1].rank;
        optimal_move(hand, &dealer_upcard, can_double, can_split)
    }

    fn on_results(&mut self, hands: &[Hand], dealer: &[Card]) {
        for card in dealer {
            self.count(card);
        }
        for hand in hands {
            for card in &hand.cards {
                self.count(card);
            }
        }
        log::trace!(
            "Count after round: running {}, true {}, seen {}",
            self.running_count,
            self.true_count(),
            self.seen
        );
    }
}
