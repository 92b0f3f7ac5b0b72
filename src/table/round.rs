use crate::card::Card;
use crate::error::RoundError;
use crate::event::{Seat, TableEvent};
use crate::result::{Outcome, PlayerOutcome, RoundResult};

use super::{RoundState, Table};

impl Table {
    /// Dealer plays out their hand under the fixed house policy.
    ///
    /// Reveals the hole card, then draws until the hand reaches 17 or
    /// higher. The dealer stands on every 17, soft or hard, and plays the
    /// hand out even when no player hand is left standing.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer-turn phase, or the
    /// shoe is empty with rebuilding disabled.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        self.dealer.reveal_hole();
        if let Some(&card) = self.dealer.cards().get(1) {
            self.events.push(TableEvent::HoleRevealed { card });
        }

        let mut drawn = Vec::new();
        loop {
            // Stand on 17 through 21, bust above 21, draw below 17.
            if self.dealer.value() >= 17 {
                break;
            }

            let card = self.draw_card().ok_or(RoundError::NoCards)?;
            self.dealer.add_card(card);
            self.events.push(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
            });
            drawn.push(card);
        }

        self.state = RoundState::RoundOver;

        Ok(drawn)
    }

    /// Settles every betting player against the dealer's final hand.
    ///
    /// Applies [`Outcome::resolve`] per player in betting order, credits the
    /// payouts back to the bankrolls, and reports the round's results.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished playing.
    pub fn settle(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::RoundOver {
            return Err(RoundError::InvalidState);
        }

        let dealer_value = self.dealer.value();
        let mut outcomes = Vec::with_capacity(self.betting_order.len());

        for index in 0..self.betting_order.len() {
            let seat = self.betting_order[index];
            let player = &self.players[seat];

            let hand_value = player.hand.value();
            let bet = player.bet;
            let outcome =
                Outcome::resolve(hand_value, dealer_value, player.hand.len(), player.doubled);
            let payout = outcome.payout(bet);

            self.players[seat].chips += payout;
            outcomes.push(PlayerOutcome {
                seat,
                outcome,
                bet,
                payout,
                hand_value,
            });
        }

        Ok(RoundResult {
            outcomes,
            dealer_value,
            dealer_bust: dealer_value > 21,
        })
    }
}
