//! Card types, token parsing, and per-card valuation.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in shoe-construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The suit's pip symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }

    /// Whether the suit conventionally prints in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Whether this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Blackjack value of this card against the running hand total.
    ///
    /// Face cards count 10 and numeric ranks count themselves. An ace counts
    /// 11 when that keeps the running total at 21 or below, 1 otherwise.
    #[must_use]
    pub const fn value(self, running_total: u8) -> u8 {
        match self.rank {
            1 => {
                if running_total.saturating_add(11) <= 21 {
                    11
                } else {
                    1
                }
            }
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Hi-Lo style count contribution of this card.
    ///
    /// Ranks 2 through 6 count -1, 7 through 9 count 0, and tens, faces, and
    /// aces count +1. Informational only; payouts never consult the count.
    #[must_use]
    pub const fn count_value(self) -> i32 {
        match self.rank {
            2..=6 => -1,
            7..=9 => 0,
            _ => 1,
        }
    }

    /// The rank's display label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn rank_label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a rank-then-suit token such as `A♠`, `10♦`, or `kh`.
    ///
    /// Suits are accepted as pip symbols or as the ASCII letters s/h/d/c,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_token = chars.as_str();

        let suit = match suit_char {
            '♠' | 's' | 'S' => Suit::Spades,
            '♥' | 'h' | 'H' => Suit::Hearts,
            '♦' | 'd' | 'D' => Suit::Diamonds,
            '♣' | 'c' | 'C' => Suit::Clubs,
            other => return Err(ParseCardError::Suit(other)),
        };

        let rank = match rank_token {
            "A" | "a" => 1,
            "J" | "j" => 11,
            "Q" | "q" => 12,
            "K" | "k" => 13,
            numeric => match numeric.parse::<u8>() {
                Ok(rank @ 2..=10) => rank,
                _ => return Err(ParseCardError::Rank(rank_token.to_owned())),
            },
        };

        Ok(Self::new(suit, rank))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
