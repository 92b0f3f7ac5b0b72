//! Player and dealer hand representations.

use crate::card::Card;

/// Calculates the value of a set of cards.
///
/// Non-aces are folded in first so that every ace is valued against the full
/// fixed total; each ace then adds 11 when that stays at or under 21, and 1
/// otherwise. The result is invariant to deal order for the same multiset.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;

    for card in cards.iter().filter(|card| !card.is_ace()) {
        value = value.saturating_add(card.value(value));
    }
    for card in cards.iter().filter(|card| card.is_ace()) {
        value = value.saturating_add(card.value(value));
    }

    value
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood, or drew to exactly 21.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a blackjack (two-card 21 on the initial deal).
    Blackjack,
    /// Player doubled down; the hand took exactly one more card.
    Double,
}

impl HandStatus {
    /// Whether the hand can still take actions.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for HandStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// A player's hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
        }
    }

    /// Adds a card to the hand and re-evaluates the status.
    ///
    /// The value is recomputed from scratch on every append; ace revaluation
    /// can change retroactively, so nothing is cached. A two-card 21 is a
    /// blackjack; 21 on three or more cards ends the turn as a stand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = evaluate_cards(&self.cards);
        if value > 21 {
            self.status = HandStatus::Bust;
        } else if value == 21 {
            self.status = if self.cards.len() == 2 {
                HandStatus::Blackjack
            } else {
                HandStatus::Stand
            };
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Sets the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.status = HandStatus::Active;
    }
}

/// The dealer's hand.
///
/// The second card stays concealed until the dealer's turn begins.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole is
    /// concealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.cards.first().map_or(0, |card| card.value(0))
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
