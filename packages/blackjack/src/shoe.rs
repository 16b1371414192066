//! The shoe: an ordered sequence of cards dealt from the front.
//!
//! A shoe is built by applying construction steps, in order, to the 52
//! standard cards. Steps are plain sequence transforms, so
//! `[filter(..), shuffle()]` and `[shuffle(), filter(..)]` are different shoes.

use std::cmp::Ordering;
use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Card, Error, Rank, Suit};

/// One construction step.
pub type Step<'a> = Box<dyn FnOnce(Vec<Card>) -> Vec<Card> + 'a>;

/// Number of cards in one standard deck.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    pub fn new<'a>(steps: impl IntoIterator<Item = Step<'a>>) -> Self {
        let cards = steps
            .into_iter()
            .fold(standard_cards(), |cards, step| step(cards));
        Self::from_cards(cards)
    }

    /// One unshuffled deck.
    pub fn standard() -> Self {
        Self::from_cards(standard_cards())
    }

    /// A shoe holding exactly `cards`, the first element dealt first.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn draw(&mut self) -> Result<Card, Error> {
        self.cards.pop_front().ok_or(Error::ShoeEmpty)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// The 52 standard cards in default-sort order.
pub fn standard_cards() -> Vec<Card> {
    (0..DECK_SIZE).filter_map(Card::from_index).collect()
}

/// Concatenate `n` copies of the accumulated cards.
pub fn deck<'a>(n: usize) -> Step<'a> {
    Box::new(move |cards: Vec<Card>| {
        let mut out = Vec::with_capacity(cards.len() * n);
        for _ in 0..n {
            out.extend_from_slice(&cards);
        }
        out
    })
}

/// Append `n` jokers.
pub fn jokers<'a>(n: usize) -> Step<'a> {
    Box::new(move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(|i| {
            // Rank only tells jokers apart, it carries no score.
            let rank = Rank::ALL[i % Rank::ALL.len()];
            Card::new(rank, Suit::Joker)
        }));
        cards
    })
}

/// Remove every card for which `pred` returns true.
pub fn filter<'a, F>(pred: F) -> Step<'a>
where
    F: Fn(&Card) -> bool + 'a,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.retain(|card| !pred(card));
        cards
    })
}

/// Uniform shuffle using the calling thread's RNG.
pub fn shuffle<'a>() -> Step<'a> {
    Box::new(|mut cards: Vec<Card>| {
        cards.shuffle(&mut rand::thread_rng());
        cards
    })
}

/// Uniform shuffle driven by a caller-owned RNG.
pub fn shuffle_with<'a, R>(rng: &'a mut R) -> Step<'a>
where
    R: Rng + ?Sized,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.shuffle(rng);
        cards
    })
}

pub fn default_sort<'a>() -> Step<'a> {
    Box::new(|mut cards: Vec<Card>| {
        cards.sort();
        cards
    })
}

pub fn sort_by<'a, F>(cmp: F) -> Step<'a>
where
    F: FnMut(&Card, &Card) -> Ordering + 'a,
{
    Box::new(move |mut cards: Vec<Card>| {
        cards.sort_by(cmp);
        cards
    })
}
