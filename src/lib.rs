//! A terminal blackjack engine with persistent chip balances.
//!
//! The crate provides a [`Table`] type that manages the full round flow
//! (betting, the initial deal, player actions, dealer play, settlement) for
//! one or more players against the dealer, a [`Ledger`] that persists chip
//! balances between sessions, and a [`ui`] module the bundled binary uses
//! for rendering.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 42);
//! let seat = table.seat("Ada", 10_000.0);
//! table.place_bet(seat, 50.0).unwrap();
//! table.deal().unwrap();
//! ```

pub mod card;
pub mod error;
pub mod event;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod table;
pub mod ui;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{ActionError, BetError, DealError, LedgerError, ParseCardError, RoundError};
pub use event::{Seat, TableEvent};
pub use hand::{DealerHand, Hand, HandStatus};
pub use ledger::Ledger;
pub use options::TableOptions;
pub use player::Player;
pub use result::{Outcome, PlayerOutcome, RoundResult};
pub use shoe::Shoe;
pub use table::{RoundState, Table};
