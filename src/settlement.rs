use blackjack::{calculate_hand_value, is_blackjack, Card, Hand, HandOutcome, PayoutRatio};
use serde::{Deserialize, Serialize};

use crate::TableError;

/// Outcome of one player hand and what it won or lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub outcome: HandOutcome,
    pub net: i64,
}

/// Settle one player hand against the dealer's final cards.
///
/// Blackjacks are checked first, then player bust, so a busted hand loses
/// even when the dealer busts too. Fails only if the blackjack payout does
/// not fit in an `i64`.
pub fn settle_hand(
    hand: &Hand,
    dealer: &[Card],
    payout: PayoutRatio,
) -> Result<HandResult, TableError> {
    let player_score = hand.value();
    let dealer_score = calculate_hand_value(dealer);
    let player_blackjack = hand.is_blackjack();
    let dealer_blackjack = is_blackjack(dealer);

    let outcome = if player_blackjack && dealer_blackjack {
        HandOutcome::Push
    } else if dealer_blackjack {
        HandOutcome::Loss
    } else if player_blackjack {
        HandOutcome::Blackjack
    } else if player_score > 21 {
        HandOutcome::Loss
    } else if dealer_score > 21 || player_score > dealer_score {
        HandOutcome::Win
    } else if dealer_score > player_score {
        HandOutcome::Loss
    } else {
        HandOutcome::Push
    };

    let net = match outcome {
        HandOutcome::Win => hand.bet,
        HandOutcome::Loss => -hand.bet,
        HandOutcome::Push => 0,
        HandOutcome::Blackjack => payout
            .calculate_payout(hand.bet)
            .ok_or_else(|| TableError::overflow(format!("{payout} payout on {}", hand.bet)))?,
    };

    Ok(HandResult { outcome, net })
}

/// Settle every player hand; returns per-hand results and their summed net.
pub fn settle_round(
    hands: &[Hand],
    dealer: &[Card],
    payout: PayoutRatio,
) -> Result<(Vec<HandResult>, i64), TableError> {
    let results = hands
        .iter()
        .map(|hand| settle_hand(hand, dealer, payout))
        .collect::<Result<Vec<_>, _>>()?;
    let net = results
        .iter()
        .try_fold(0i64, |total, r| total.checked_add(r.net))
        .ok_or_else(|| TableError::overflow("round net"))?;
    Ok((results, net))
}
