use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Diamond,
    Club,
    Heart,
    Joker,
}

impl Suit {
    /// The four suits of a standard deck, in default-sort order.
    pub const STANDARD: [Suit; 4] = [Suit::Spade, Suit::Diamond, Suit::Club, Suit::Heart];

    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
            Suit::Heart => "♥",
            Suit::Joker => "🃏",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Spade => "Spade",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
            Suit::Heart => "Heart",
            Suit::Joker => "Joker",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value, Ace = 1 through King = 13.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=13 => Some(Self::ALL[(ordinal - 1) as usize]),
            _ => None,
        }
    }

    fn short(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        f.write_str(name)
    }
}

/// A single playing card. Field order gives the default sort: by suit, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Card at `index` (0-51) of a default-sorted deck: suit = index / 13, rank = index % 13.
    pub fn from_index(index: usize) -> Option<Self> {
        let suit = *Suit::STANDARD.get(index / 13)?;
        let rank = Rank::ALL[index % 13];
        Some(Self::new(rank, suit))
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }

    pub fn is_ace(&self) -> bool {
        !self.is_joker() && self.rank == Rank::Ace
    }

    /// Hard point value: aces count 1, tens and faces 10, jokers nothing.
    pub fn points(&self) -> u8 {
        if self.is_joker() {
            0
        } else {
            self.rank.ordinal().min(10)
        }
    }

    /// Value used when reading a dealer upcard, with the ace counted as 11.
    pub fn upcard_value(&self) -> u8 {
        if self.is_ace() {
            11
        } else {
            self.points()
        }
    }

    pub fn to_display(&self) -> String {
        if self.is_joker() {
            return self.suit.symbol().to_string();
        }
        format!("{}{}", self.rank.short(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", self.suit);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Heart).to_string(), "Ace of Hearts");
        assert_eq!(Card::new(Rank::Two, Suit::Spade).to_string(), "Two of Spades");
        assert_eq!(Card::new(Rank::Nine, Suit::Diamond).to_string(), "Nine of Diamonds");
        assert_eq!(Card::new(Rank::Jack, Suit::Club).to_string(), "Jack of Clubs");
        assert_eq!(Card::new(Rank::Ace, Suit::Joker).to_string(), "Joker");
    }

    #[test]
    fn test_to_display_symbols() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spade).to_display(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Heart).to_display(), "10♥");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamond).to_display(), "Q♦");
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Card::from_index(0), Some(Card::new(Rank::Ace, Suit::Spade)));
        assert_eq!(Card::from_index(12), Some(Card::new(Rank::King, Suit::Spade)));
        assert_eq!(Card::from_index(13), Some(Card::new(Rank::Ace, Suit::Diamond)));
        assert_eq!(Card::from_index(51), Some(Card::new(Rank::King, Suit::Heart)));
        assert_eq!(Card::from_index(52), None);
    }

    #[test]
    fn test_ordering_is_suit_then_rank() {
        let ace_spades = Card::new(Rank::Ace, Suit::Spade);
        let king_spades = Card::new(Rank::King, Suit::Spade);
        let two_diamonds = Card::new(Rank::Two, Suit::Diamond);
        assert!(ace_spades < king_spades);
        assert!(king_spades < two_diamonds);
    }

    #[test]
    fn test_points() {
        assert_eq!(Card::new(Rank::Ace, Suit::Club).points(), 1);
        assert_eq!(Card::new(Rank::Seven, Suit::Club).points(), 7);
        assert_eq!(Card::new(Rank::King, Suit::Club).points(), 10);
        assert_eq!(Card::new(Rank::Three, Suit::Joker).points(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Club).upcard_value(), 11);
    }

    #[test]
    fn test_rank_from_ordinal() {
        assert_eq!(Rank::from_ordinal(1), Some(Rank::Ace));
        assert_eq!(Rank::from_ordinal(13), Some(Rank::King));
        assert_eq!(Rank::from_ordinal(0), None);
        assert_eq!(Rank::from_ordinal(14), None);
    }
}
