//! Seated player state.

use crate::hand::Hand;

/// A seated player: identity, bankroll, and per-round hand state.
///
/// Chips never go negative; bets are deducted from the bankroll the moment
/// they are placed. Only the name and chip balance outlive the session (via
/// the ledger).
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name, also the ledger key.
    pub name: String,
    /// Chip balance.
    pub chips: f64,
    /// Bet riding on the round in progress; zero while sitting out.
    pub bet: f64,
    /// Cards for the round in progress.
    pub hand: Hand,
    /// Whether the bet was doubled this round.
    pub doubled: bool,
}

impl Player {
    /// Creates a player with the given bankroll.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: f64) -> Self {
        Self {
            name: name.into(),
            chips,
            bet: 0.0,
            hand: Hand::new(),
            doubled: false,
        }
    }

    /// Whether the player has a bet riding on the current round.
    #[must_use]
    pub fn in_round(&self) -> bool {
        self.bet > 0.0
    }

    /// Resets per-round state, keeping the bankroll.
    pub fn clear_round(&mut self) {
        self.bet = 0.0;
        self.doubled = false;
        self.hand.clear();
    }
}
