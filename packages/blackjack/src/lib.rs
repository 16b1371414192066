mod card;
mod error;
mod hand;
mod rules;
pub mod shoe;
mod strategy;

pub use card::{Card, Rank, Suit};
pub use error::Error;
pub use hand::{
    calculate_hand_value, can_split_cards, is_blackjack, is_busted, is_soft_hand, min_hand_value,
    Hand, HandOutcome,
};
pub use rules::PayoutRatio;
pub use shoe::Shoe;
pub use strategy::{optimal_move, Move};
