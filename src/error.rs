//! Error types for table operations.

use std::io;

use thiserror::Error;

/// Errors from parsing a card token.
///
/// A malformed token is a programmer error; a well-formed shoe never
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token was empty.
    #[error("empty card token")]
    Empty,
    /// The rank portion could not be parsed.
    #[error("unrecognized rank `{0}`")]
    Rank(String),
    /// The suit character could not be parsed.
    #[error("unrecognized suit `{0}`")]
    Suit(char),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// No player at that seat.
    #[error("no player at that seat")]
    UnknownSeat,
    /// Bet amount must be positive.
    #[error("bet amount must be positive")]
    NonPositive,
    /// Bet exceeds the player's chips.
    #[error("bet exceeds the player's chips")]
    InsufficientChips,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No player has placed a bet.
    #[error("no player has placed a bet")]
    NoBets,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// Not this seat's turn.
    #[error("not this seat's turn")]
    NotYourTurn,
    /// No player at that seat.
    #[error("no player at that seat")]
    UnknownSeat,
    /// Hand is not active.
    #[error("hand is not active")]
    HandNotActive,
    /// Not enough chips to double the bet.
    #[error("not enough chips to double the bet")]
    InsufficientChips,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur during the dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors from saving the chip ledger.
///
/// Loading never fails: a missing or malformed file reads as an empty
/// ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Writing the ledger file failed.
    #[error("failed to write ledger file")]
    Io(#[from] io::Error),
    /// Serializing the balances failed.
    #[error("failed to serialize balances")]
    Serialize(#[from] serde_json::Error),
}
