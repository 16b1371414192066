use std::io::{self, BufRead, Write};

use blackjack::{calculate_hand_value, Card, Hand, Move, PayoutRatio};
use blackjack_table::{settle_hand, Strategy};

/// A human at the terminal. Reads bets and moves line by line; end of input
/// falls back to the default bet and to standing.
pub struct ConsoleStrategy<R, W> {
    input: R,
    output: W,
    default_bet: i64,
    payout: PayoutRatio,
}

impl<R: BufRead, W: Write> ConsoleStrategy<R, W> {
    pub fn new(input: R, output: W, default_bet: i64, payout: PayoutRatio) -> Self {
        Self {
            input,
            output,
            default_bet,
            payout,
        }
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, line: &str) {
        if let Err(e) = writeln!(self.output, "{line}") {
            log::warn!("Console write failed: {e}");
        }
    }
}

impl<R: BufRead, W: Write> Strategy for ConsoleStrategy<R, W> {
    fn bet(&mut self, shuffled: bool) -> i64 {
        if shuffled {
            self.say("Shuffling...");
        }

        loop {
            let text = format!("Bet [{}]: ", self.default_bet);
            match self.prompt(&text) {
                Ok(Some(line)) if line.is_empty() => return self.default_bet,
                Ok(Some(line)) => match line.parse::<i64>() {
                    Ok(bet) => return bet,
                    Err(_) => self.say("Enter a whole number"),
                },
                Ok(None) => return self.default_bet,
                Err(e) => {
                    log::warn!("Console read failed: {e}");
                    return self.default_bet;
                }
            }
        }
    }

    fn choose_move(&mut self, hand: &[Card], dealer_upcard: Card) -> Move {
        let cards: Vec<String> = hand.iter().map(Card::to_display).collect();
        self.say(&format!(
            "Dealer shows {}. Your hand: {} ({})",
            dealer_upcard.to_display(),
            cards.join(" "),
            calculate_hand_value(hand)
        ));

        loop {
            match self.prompt("(h)it, (s)tand, (d)ouble, s(p)lit: ") {
                Ok(Some(line)) => match line.parse::<Move>() {
                    Ok(mv) => return mv,
                    Err(e) => self.say(&e.to_string()),
                },
                Ok(None) => return Move::Stand,
                Err(e) => {
                    log::warn!("Console read failed: {e}");
                    return Move::Stand;
                }
            }
        }
    }

    fn on_results(&mut self, hands: &[Hand], dealer: &[Card]) {
        let dealer_cards: Vec<String> = dealer.iter().map(Card::to_display).collect();
        self.say(&format!(
            "Dealer: {} ({})",
            dealer_cards.join(" "),
            calculate_hand_value(dealer)
        ));

        for (i, hand) in hands.iter().enumerate() {
            let line = match settle_hand(hand, dealer, self.payout) {
                Ok(result) => format!(
                    "Hand {}: {} ({}) {:?} {:+}",
                    i + 1,
                    hand.to_display(),
                    hand.value(),
                    result.outcome,
                    result.net
                ),
                Err(e) => format!("Hand {}: {} ({e})", i + 1, hand.to_display()),
            };
            self.say(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{Rank, Suit};
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleStrategy<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleStrategy::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            10,
            PayoutRatio::THREE_TO_TWO,
        )
    }

    fn output(console: &ConsoleStrategy<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&console.output).into_owned()
    }

    #[test]
    fn test_bet_reads_number_or_default() {
        let mut human = console("abc\n25\n\n");
        assert_eq!(human.bet(true), 25);
        assert_eq!(human.bet(false), 10);
        // End of input.
        assert_eq!(human.bet(false), 10);
        let out = output(&human);
        assert!(out.contains("Shuffling..."));
        assert!(out.contains("Enter a whole number"));
    }

    #[test]
    fn test_choose_move_reprompts_unknown_input() {
        let mut human = console("x\nD\n");
        let hand = [Card::new(Rank::Five, Suit::Heart), Card::new(Rank::Six, Suit::Club)];
        let upcard = Card::new(Rank::Ten, Suit::Spade);

        assert_eq!(human.choose_move(&hand, upcard), Move::Double);
        assert_eq!(human.choose_move(&hand, upcard), Move::Stand);
        let out = output(&human);
        assert!(out.contains("Your hand: 5♥ 6♣ (11)"));
        assert!(out.contains("Unknown move"));
    }

    #[test]
    fn test_results_show_outcome() {
        let mut human = console("");
        let hand = Hand::from_cards(
            vec![Card::new(Rank::Ten, Suit::Heart), Card::new(Rank::Nine, Suit::Club)],
            10,
        );
        let dealer = [Card::new(Rank::Ten, Suit::Spade), Card::new(Rank::Eight, Suit::Spade)];
        human.on_results(&[hand], &dealer);
        assert!(output(&human).contains("Hand 1: 10♥ 9♣ (19) Win +10"));
    }
}
