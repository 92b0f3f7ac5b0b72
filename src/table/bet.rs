use crate::error::{BetError, DealError};
use crate::event::{Seat, TableEvent};

use super::{RoundState, Table};

impl Table {
    /// Places a bet for the specified seat.
    ///
    /// The bet leaves the bankroll immediately; it comes back (or not) at
    /// settlement.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, the seat is
    /// unknown, the amount is not positive, or the amount exceeds the
    /// player's chips.
    pub fn place_bet(&mut self, seat: usize, amount: f64) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self.players.get_mut(seat).ok_or(BetError::UnknownSeat)?;

        if amount <= 0.0 {
            return Err(BetError::NonPositive);
        }
        if amount > player.chips {
            return Err(BetError::InsufficientChips);
        }

        player.chips -= amount;
        player.bet = amount;

        Ok(())
    }

    /// Deals the initial two cards to every betting player, then the dealer.
    ///
    /// Players are dealt both cards in seat order, then the dealer receives
    /// an up card and a hole card. A two-card 21 is marked blackjack and its
    /// seat is skipped in the turn order; if every hand finishes on the deal
    /// the table moves straight to the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, no bets
    /// have been placed, or the shoe runs out with rebuilding disabled.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }

        let betting: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.in_round())
            .map(|(seat, _)| seat)
            .collect();

        if betting.is_empty() {
            return Err(DealError::NoBets);
        }
        self.betting_order = betting;

        for index in 0..self.betting_order.len() {
            let seat = self.betting_order[index];
            self.players[seat].hand.clear();

            for _ in 0..2 {
                let card = self.draw_card().ok_or(DealError::NotEnoughCards)?;
                self.players[seat].hand.add_card(card);
                self.events.push(TableEvent::CardDealt {
                    seat: Seat::Player(seat),
                    card,
                });
            }
        }

        self.dealer.clear();
        for _ in 0..2 {
            let card = self.draw_card().ok_or(DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
            self.events.push(TableEvent::CardDealt {
                seat: Seat::Dealer,
                card,
            });
        }

        self.turn = 0;
        self.advance_past_finished();
        self.state = if self.current_seat().is_some() {
            RoundState::PlayerTurn
        } else {
            RoundState::DealerTurn
        };

        Ok(())
    }
}
