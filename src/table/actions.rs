use crate::card::Card;
use crate::error::ActionError;
use crate::event::{Seat, TableEvent};
use crate::hand::HandStatus;

use super::{RoundState, Table};

impl Table {
    fn ensure_turn(&self, seat: usize) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        if seat >= self.players.len() {
            return Err(ActionError::UnknownSeat);
        }
        if self.current_seat() != Some(seat) {
            return Err(ActionError::NotYourTurn);
        }
        if !self.players[seat].hand.status().is_active() {
            return Err(ActionError::HandNotActive);
        }

        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        self.advance_past_finished();
        if self.current_seat().is_none() {
            self.state = RoundState::DealerTurn;
        }
    }

    /// Player action: hit (draw a card).
    ///
    /// Drawing to exactly 21 ends the turn as a stand; drawing over 21 busts
    /// the hand. Either way the turn passes on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this seat's turn to act on an active
    /// hand, or the shoe is empty with rebuilding disabled.
    pub fn hit(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_turn(seat)?;

        let card = self.draw_card().ok_or(ActionError::NoCards)?;
        self.players[seat].hand.add_card(card);
        self.events.push(TableEvent::CardDealt {
            seat: Seat::Player(seat),
            card,
        });

        if !self.players[seat].hand.status().is_active() {
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: stand (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this seat's turn to act on an active
    /// hand.
    pub fn stand(&mut self, seat: usize) -> Result<(), ActionError> {
        self.ensure_turn(seat)?;

        self.players[seat].hand.set_status(HandStatus::Stand);
        self.advance_turn();

        Ok(())
    }

    /// Player action: double down.
    ///
    /// Deducts a second bet from the bankroll, doubles the recorded bet,
    /// draws exactly one card, and ends the turn. The hand keeps the
    /// `Double` status even when the drawn card busts it; settlement rules
    /// on the value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InsufficientChips`] when the bankroll cannot
    /// cover a second bet, leaving the hand untouched so the caller can ask
    /// for a different action. Also errors if it is not this seat's turn to
    /// act on an active hand, or the shoe is empty with rebuilding disabled.
    pub fn double_down(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_turn(seat)?;

        if self.players[seat].bet > self.players[seat].chips {
            return Err(ActionError::InsufficientChips);
        }

        let card = self.draw_card().ok_or(ActionError::NoCards)?;

        let player = &mut self.players[seat];
        player.chips -= player.bet;
        player.bet *= 2.0;
        player.doubled = true;
        player.hand.add_card(card);
        player.hand.set_status(HandStatus::Double);

        self.events.push(TableEvent::CardDealt {
            seat: Seat::Player(seat),
            card,
        });
        self.advance_turn();

        Ok(card)
    }
}
