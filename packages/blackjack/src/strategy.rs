use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::hand::{calculate_hand_value, can_split_cards, is_soft_hand};
use crate::{Card, Error, Rank};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Hit,
    Stand,
    Double,
    Split,
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hit" => Ok(Move::Hit),
            "s" | "stand" => Ok(Move::Stand),
            "d" | "double" => Ok(Move::Double),
            "p" | "split" => Ok(Move::Split),
            other => Err(Error::UnknownMove(other.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Hit => "hit",
            Move::Stand => "stand",
            Move::Double => "double",
            Move::Split => "split",
        };
        f.write_str(name)
    }
}

/// Get the optimal move based on basic strategy
pub fn optimal_move(
    player_cards: &[Card],
    dealer_up_card: &Card,
    can_double: bool,
    can_split: bool,
) -> Move {
    let player_value = calculate_hand_value(player_cards);
    let dealer_value = dealer_up_card.upcard_value();
    let is_soft = is_soft_hand(player_cards);

    if can_split && player_cards.len() == 2 && can_split_cards(&player_cards[0], &player_cards[1]) {
        match player_cards[0].rank {
            // Always split Aces and 8s
            Rank::Ace | Rank::Eight => return Move::Split,
            // Split 9s except against 7, 10, or Ace
            Rank::Nine if !matches!(dealer_value, 7 | 10 | 11) => return Move::Split,
            // Split 2s, 3s, 6s and 7s against 2-7
            Rank::Two | Rank::Three | Rank::Six | Rank::Seven
                if (2..=7).contains(&dealer_value) =>
            {
                return Move::Split
            }
            // Never split 10s, 5s, 4s; fall through to regular strategy
            _ => {}
        }
    }

    if can_double {
        let double = if is_soft {
            match player_value {
                19 => dealer_value == 6,
                18 => (2..=6).contains(&dealer_value),
                17 => (3..=6).contains(&dealer_value),
                15 | 16 => (4..=6).contains(&dealer_value),
                13 | 14 => (5..=6).contains(&dealer_value),
                _ => false,
            }
        } else {
            match player_value {
                11 => true,
                10 => dealer_value <= 9,
                9 => (3..=6).contains(&dealer_value),
                _ => false,
            }
        };
        if double {
            return Move::Double;
        }
    }

    if is_soft {
        if player_value >= 19 {
            Move::Stand
        } else if player_value == 18 {
            if dealer_value >= 9 {
                Move::Hit
            } else {
                Move::Stand
            }
        } else {
            Move::Hit
        }
    } else if player_value >= 17 {
        Move::Stand
    } else if (13..=16).contains(&player_value) {
        if (2..=6).contains(&dealer_value) {
            Move::Stand
        } else {
            Move::Hit
        }
    } else if player_value == 12 {
        if (4..=6).contains(&dealer_value) {
            Move::Stand
        } else {
            Move::Hit
        }
    } else {
        Move::Hit
    }
}
