//! Round state types.

/// Phase of the round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Accepting bets (and top-ups) for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
}
