//! Table engine and round state management.

use crate::card::Card;
use crate::error::BetError;
use crate::event::TableEvent;
use crate::hand::DealerHand;
use crate::options::TableOptions;
use crate::player::Player;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod round;
pub mod state;

pub use state::RoundState;

/// A blackjack table that manages seating, betting, and round flow.
///
/// The table owns the shoe, every player's state, and the dealer's hand, and
/// is driven synchronously by a single session loop; all mutation goes
/// through `&mut self`. Rendering is not its concern: state changes are
/// queued as [`TableEvent`]s for the presentation layer to drain.
#[derive(Debug)]
pub struct Table {
    /// Cards for the session.
    pub shoe: Shoe,
    /// Table rules.
    pub options: TableOptions,
    /// Seated players, in seat order.
    players: Vec<Player>,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Phase of the round in progress.
    state: RoundState,
    /// Seats that bet this round, in turn order.
    betting_order: Vec<usize>,
    /// Index into `betting_order` of the seat to act.
    turn: usize,
    /// Hi-Lo running count since the last shuffle.
    running_count: i32,
    /// Notifications not yet drained by the presentation layer.
    events: Vec<TableEvent>,
}

impl Table {
    /// Creates a table with the given options and shoe seed.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Table, TableOptions};
    ///
    /// let mut table = Table::new(TableOptions::default(), 42);
    /// let seat = table.seat("Ada", 10_000.0);
    /// assert_eq!(table.players()[seat].chips, 10_000.0);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, options.reshuffle_at, seed);

        Self {
            shoe,
            options,
            players: Vec::new(),
            dealer: DealerHand::new(),
            state: RoundState::Betting,
            betting_order: Vec::new(),
            turn: 0,
            running_count: 0,
            events: Vec::new(),
        }
    }

    /// Seats a player with the given bankroll and returns the seat index.
    pub fn seat(&mut self, name: impl Into<String>, chips: f64) -> usize {
        self.players.push(Player::new(name, chips));
        self.players.len() - 1
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the seat whose turn it is, if any hand is still active.
    #[must_use]
    pub fn current_seat(&self) -> Option<usize> {
        self.betting_order.get(self.turn).copied()
    }

    /// Returns the seats that bet this round, in turn order.
    #[must_use]
    pub fn betting_order(&self) -> &[usize] {
        &self.betting_order
    }

    /// Returns the Hi-Lo running count since the last shuffle.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Drains and returns the queued presentation events.
    pub fn take_events(&mut self) -> Vec<TableEvent> {
        core::mem::take(&mut self.events)
    }

    /// Credits the configured top-up to a player during betting.
    ///
    /// The session offers this to players whose balance has reached zero;
    /// accepting keeps them in the game, declining sits them out.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase or the seat
    /// is unknown.
    pub fn accept_top_up(&mut self, seat: usize) -> Result<f64, BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        let top_up = self.options.top_up;
        let player = self.players.get_mut(seat).ok_or(BetError::UnknownSeat)?;
        player.chips += top_up;

        Ok(player.chips)
    }

    /// Clears all hands and bets and returns the table to the betting phase.
    ///
    /// Chip balances and the shoe carry over to the next round.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.clear_round();
        }
        self.dealer.clear();
        self.betting_order.clear();
        self.turn = 0;
        self.state = RoundState::Betting;
    }

    /// Draws one card, rebuilding the shoe first if it has run low.
    ///
    /// Every draw in the game funnels through here so the depletion check,
    /// the running count, and the reshuffle notification stay in one place.
    pub(crate) fn draw_card(&mut self) -> Option<Card> {
        if self.shoe.replenish_if_needed() {
            self.running_count = 0;
            self.events.push(TableEvent::ShoeReshuffled {
                remaining: self.shoe.remaining(),
            });
        }

        let card = self.shoe.draw()?;
        self.running_count += card.count_value();
        Some(card)
    }

    /// Moves the turn cursor past every hand that can no longer act.
    pub(crate) fn advance_past_finished(&mut self) {
        while let Some(&seat) = self.betting_order.get(self.turn) {
            if self.players[seat].hand.status().is_active() {
                break;
            }
            self.turn += 1;
        }
    }
}
