//! Structured notifications from the table to the presentation layer.

use crate::card::Card;

/// Identifies whose hand an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// A seated player, by seat index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// A state change reported by the table.
///
/// The rules engine never renders; it queues these and the presentation
/// layer drains them with [`crate::table::Table::take_events`] after each
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A card left the shoe and joined a hand.
    ///
    /// Hole cards are reported too; concealment is the presentation layer's
    /// decision.
    CardDealt {
        /// The receiving hand.
        seat: Seat,
        /// The drawn card.
        card: Card,
    },
    /// The dealer turned over the hole card.
    HoleRevealed {
        /// The formerly concealed card.
        card: Card,
    },
    /// The shoe dropped below its threshold and was rebuilt before a draw.
    ShoeReshuffled {
        /// Cards in the rebuilt shoe.
        remaining: usize,
    },
}
