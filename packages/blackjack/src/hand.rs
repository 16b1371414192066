use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
    Blackjack,
}

/// Hard value of a hand: every ace counts 1, tens and faces 10.
pub fn min_hand_value(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.points()))
}

/// Best value of a hand.
///
/// At most one ace is ever promoted from 1 to 11: a second promotion would
/// add 20 and always bust.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let min = min_hand_value(cards);
    if min > 11 {
        return min;
    }

    if cards.iter().any(Card::is_ace) {
        min + 10
    } else {
        min
    }
}

/// Check if a hand is soft (an ace is currently counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    calculate_hand_value(cards) != min_hand_value(cards)
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > 21
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == 21
}

/// Check if two cards can be split (same rank)
pub fn can_split_cards(card1: &Card, card2: &Card) -> bool {
    card1.rank == card2.rank
}

/// A player hand and the amount riding on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub bet: i64,
    pub doubled: bool,
}

impl Hand {
    pub fn new(bet: i64) -> Self {
        Self {
            cards: Vec::with_capacity(5),
            bet,
            doubled: false,
        }
    }

    pub fn from_cards(cards: Vec<Card>, bet: i64) -> Self {
        Self {
            cards,
            bet,
            doubled: false,
        }
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn min_value(&self) -> u8 {
        min_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn can_double(&self) -> bool {
        self.cards.len() == 2
    }

    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && can_split_cards(&self.cards[0], &self.cards[1])
    }

    pub fn to_display(&self) -> String {
        self.cards
            .iter()
            .map(Card::to_display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn c(rank: Rank) -> Card {
        Card::new(rank, Suit::Spade)
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        let cards = vec![c(Rank::Two), c(Rank::Three)];
        assert_eq!(calculate_hand_value(&cards), 5);
        assert_eq!(min_hand_value(&cards), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        let cards = vec![c(Rank::King), c(Rank::Queen)];
        assert_eq!(calculate_hand_value(&cards), 20);
    }

    #[test]
    fn test_calculate_hand_value_blackjack() {
        let cards = vec![c(Rank::Ace), c(Rank::King)];
        assert_eq!(calculate_hand_value(&cards), 21);
        assert_eq!(min_hand_value(&cards), 11);
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        let cards = vec![c(Rank::Ace), c(Rank::Six)];
        assert_eq!(calculate_hand_value(&cards), 17); // Ace as 11
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        let cards = vec![c(Rank::Ace), c(Rank::Six), c(Rank::Nine)];
        assert_eq!(calculate_hand_value(&cards), 16); // Ace as 1
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        let cards = vec![c(Rank::Ace), c(Rank::Ace), c(Rank::Nine)];
        assert_eq!(calculate_hand_value(&cards), 21); // One ace as 11, one as 1
    }

    #[test]
    fn test_jokers_score_nothing() {
        let cards = vec![c(Rank::Nine), Card::new(Rank::King, Suit::Joker)];
        assert_eq!(calculate_hand_value(&cards), 9);
    }

    #[test]
    fn test_score_is_min_or_min_plus_ten() {
        for a in Rank::ALL {
            for b in Rank::ALL {
                for d in Rank::ALL {
                    let cards = vec![c(a), c(b), c(d)];
                    let diff = calculate_hand_value(&cards) - min_hand_value(&cards);
                    assert!(diff == 0 || diff == 10);
                    assert_eq!(is_soft_hand(&cards), diff == 10);
                }
            }
        }
    }

    #[test]
    fn test_is_busted() {
        let cards = vec![c(Rank::King), c(Rank::Queen), c(Rank::Five)];
        assert!(is_busted(&cards));
    }

    #[test]
    fn test_not_busted() {
        let cards = vec![c(Rank::King), c(Rank::Queen)];
        assert!(!is_busted(&cards));
    }

    #[test]
    fn test_is_blackjack() {
        let cards = vec![c(Rank::Ace), c(Rank::King)];
        assert!(is_blackjack(&cards));
    }

    #[test]
    fn test_not_blackjack_three_cards() {
        let cards = vec![c(Rank::Ten), c(Rank::Ten), c(Rank::Ace)];
        assert_eq!(calculate_hand_value(&cards), 21);
        assert!(!is_blackjack(&cards));
    }

    #[test]
    fn test_not_blackjack_wrong_value() {
        let cards = vec![c(Rank::King), c(Rank::Queen)];
        assert!(!is_blackjack(&cards));
    }

    #[test]
    fn test_is_soft_hand() {
        let cards = vec![c(Rank::Ace), c(Rank::Six)];
        assert!(is_soft_hand(&cards));
    }

    #[test]
    fn test_not_soft_hand_hard_ace() {
        let cards = vec![c(Rank::Ace), c(Rank::Six), c(Rank::Nine)];
        assert!(!is_soft_hand(&cards));
    }

    #[test]
    fn test_not_soft_hand_no_ace() {
        let cards = vec![c(Rank::King), c(Rank::Queen)];
        assert!(!is_soft_hand(&cards));
    }

    #[test]
    fn test_can_split_cards_same_rank() {
        let card1 = Card::new(Rank::Eight, Suit::Spade);
        let card2 = Card::new(Rank::Eight, Suit::Diamond);
        assert!(can_split_cards(&card1, &card2));
    }

    #[test]
    fn test_can_split_cards_different_rank() {
        let card1 = Card::new(Rank::Eight, Suit::Spade);
        let card2 = Card::new(Rank::Nine, Suit::Diamond);
        assert!(!can_split_cards(&card1, &card2));
    }

    #[test]
    fn test_can_split_cards_face_cards() {
        assert!(!can_split_cards(&c(Rank::King), &c(Rank::Queen))); // Different ranks
    }

    #[test]
    fn test_hand_struct_value() {
        let mut hand = Hand::new(10);
        hand.add_card(c(Rank::King));
        hand.add_card(c(Rank::Seven));
        assert_eq!(hand.value(), 17);
        assert_eq!(hand.min_value(), 17);
        assert!(!hand.is_soft());
    }

    #[test]
    fn test_hand_struct_can_split() {
        let hand = Hand::from_cards(vec![c(Rank::Eight), c(Rank::Eight)], 10);
        assert!(hand.can_split());
        assert!(hand.can_double());
    }

    #[test]
    fn test_hand_struct_cannot_split_three_cards() {
        let hand = Hand::from_cards(vec![c(Rank::Eight), c(Rank::Eight), c(Rank::Two)], 10);
        assert!(!hand.can_split());
        assert!(!hand.can_double());
    }

    #[test]
    fn test_hand_to_display() {
        let hand = Hand::from_cards(vec![c(Rank::Ace), c(Rank::Ten)], 10);
        assert_eq!(hand.to_display(), "A♠ 10♠");
    }
}
