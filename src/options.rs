//! Table configuration options.

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_reshuffle_at(52);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Shoe rebuild threshold: a draw finding fewer cards than this
    /// reshuffles the whole shoe first. Zero disables rebuilding.
    pub reshuffle_at: usize,
    /// Bankroll for a player with no saved balance.
    pub starting_chips: f64,
    /// Chips offered to a player whose balance has reached zero.
    pub top_up: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            reshuffle_at: 60,
            starting_chips: 10_000.0,
            top_up: 10_000.0,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the shoe rebuild threshold. Zero disables rebuilding.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_at(0);
    /// assert_eq!(options.reshuffle_at, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_at(mut self, reshuffle_at: usize) -> Self {
        self.reshuffle_at = reshuffle_at;
        self
    }

    /// Sets the bankroll for first-time players.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(500.0);
    /// assert_eq!(options.starting_chips, 500.0);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: f64) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the top-up amount offered to broke players.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_top_up(1_000.0);
    /// assert_eq!(options.top_up, 1_000.0);
    /// ```
    #[must_use]
    pub const fn with_top_up(mut self, top_up: f64) -> Self {
        self.top_up = top_up;
        self
    }
}
