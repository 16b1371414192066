use std::collections::VecDeque;

use blackjack::{calculate_hand_value, min_hand_value, Card, Hand, Move};

/// A decision maker seated at the table.
///
/// The engine calls these synchronously, one at a time. `choose_move` only
/// ever sees a shared borrow of the acting hand.
pub trait Strategy {
    /// Amount to wager on the next round. `shuffled` is true when the shoe
    /// was rebuilt just before this bet.
    fn bet(&mut self, shuffled: bool) -> i64;

    fn choose_move(&mut self, hand: &[Card], dealer_upcard: Card) -> Move;

    /// Called once per round after settlement with every final hand.
    fn on_results(&mut self, hands: &[Hand], dealer: &[Card]);
}

/// The house rule: hit on 16 or less, and on a 17 that is not made of hard points.
#[derive(Debug, Clone, Copy, Default)]
pub struct DealerRule;

impl DealerRule {
    pub fn should_hit(cards: &[Card]) -> bool {
        let score = calculate_hand_value(cards);
        score <= 16 || (score == 17 && min_hand_value(cards) != 17)
    }
}

impl Strategy for DealerRule {
    fn bet(&mut self, _shuffled: bool) -> i64 {
        1
    }

    fn choose_move(&mut self, hand: &[Card], _dealer_upcard: Card) -> Move {
        if Self::should_hit(hand) {
            Move::Hit
        } else {
            Move::Stand
        }
    }

    fn on_results(&mut self, _hands: &[Hand], _dealer: &[Card]) {}
}

/// Plays back queued bets and moves; stands once the moves run out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    bets: VecDeque<i64>,
    moves: VecDeque<Move>,
    default_bet: i64,
    /// `shuffled` flag received by each `bet` call, oldest first
    pub shuffles: Vec<bool>,
    /// Final hands passed to `on_results`, one entry per round
    pub results: Vec<(Vec<Hand>, Vec<Card>)>,
}

impl ScriptedStrategy {
    pub fn new(default_bet: i64) -> Self {
        Self {
            default_bet,
            ..Self::default()
        }
    }

    pub fn with_bets(mut self, bets: impl IntoIterator<Item = i64>) -> Self {
        self.bets.extend(bets);
        self
    }

    pub fn with_moves(mut self, moves: impl IntoIterator<Item = Move>) -> Self {
        self.moves.extend(moves);
        self
    }

    pub fn remaining_moves(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for ScriptedStrategy {
    fn bet(&mut self, shuffled: bool) -> i64 {
        self.shuffles.push(shuffled);
        self.bets.pop_front().unwrap_or(self.default_bet)
    }

    fn choose_move(&mut self, _hand: &[Card], _dealer_upcard: Card) -> Move {
        self.moves.pop_front().unwrap_or(Move::Stand)
    }

    fn on_results(&mut self, hands: &[Hand], dealer: &[Card]) {
        self.results.push((hands.to_vec(), dealer.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Diamond)).collect()
    }

    #[test]
    fn test_dealer_hits_sixteen() {
        assert!(DealerRule::should_hit(&cards(&[Rank::Ten, Rank::Six])));
    }

    #[test]
    fn test_dealer_hits_soft_17() {
        let soft = cards(&[Rank::Ace, Rank::Six]);
        assert!(DealerRule::should_hit(&soft));
        assert_eq!(DealerRule.choose_move(&soft, soft[0]), Move::Hit);
    }

    #[test]
    fn test_dealer_stands_hard_17() {
        let hard = cards(&[Rank::Ten, Rank::Seven]);
        assert!(!DealerRule::should_hit(&hard));
        assert_eq!(DealerRule.choose_move(&hard, hard[0]), Move::Stand);
    }

    #[test]
    fn test_dealer_stands_on_ace_made_hard_17() {
        // A + 6 + 10: the ace must count 1, so this is a hard 17.
        assert!(!DealerRule::should_hit(&cards(&[Rank::Ace, Rank::Six, Rank::Ten])));
    }

    #[test]
    fn test_dealer_stands_soft_18() {
        assert!(!DealerRule::should_hit(&cards(&[Rank::Ace, Rank::Seven])));
    }

    #[test]
    fn test_scripted_strategy_plays_back_queue() {
        let mut strategy = ScriptedStrategy::new(10)
            .with_bets([25])
            .with_moves([Move::Hit, Move::Double]);
        let hand = cards(&[Rank::Two, Rank::Three]);

        assert_eq!(strategy.bet(true), 25);
        assert_eq!(strategy.bet(false), 10);
        assert_eq!(strategy.shuffles, vec![true, false]);
        assert_eq!(strategy.choose_move(&hand, hand[0]), Move::Hit);
        assert_eq!(strategy.choose_move(&hand, hand[0]), Move::Double);
        assert_eq!(strategy.choose_move(&hand, hand[0]), Move::Stand);
        assert_eq!(strategy.remaining_moves(), 0);
    }
}
