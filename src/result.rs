//! Settlement types for a finished round.

/// How a player's finished hand fared against the dealer's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the bet was forfeited when placed.
    Bust,
    /// Tie; the bet is returned.
    Push,
    /// Two-card 21; pays even money on top of the returned bet.
    Blackjack,
    /// Beat the dealer on a doubled hand; pays 2x the (already doubled) bet.
    WinDouble,
    /// Beat the dealer, or the dealer busted; pays 2x the bet.
    Win,
    /// Dealer finished higher.
    Lose,
}

impl Outcome {
    /// Resolves a finished player hand against the dealer's final value.
    ///
    /// The first matching rule wins and the order is load-bearing: a tie is
    /// checked before blackjack, so a two-card 21 against a dealer 21 is a
    /// push; blackjack is checked before the win rules, so a natural always
    /// pays blackjack odds; and a doubled win is checked before the generic
    /// win.
    #[must_use]
    pub const fn resolve(player: u8, dealer: u8, player_cards: usize, doubled: bool) -> Self {
        if player > 21 {
            Self::Bust
        } else if player == dealer {
            Self::Push
        } else if player == 21 && player_cards == 2 {
            Self::Blackjack
        } else if player > dealer && doubled {
            Self::WinDouble
        } else if player > dealer || dealer > 21 {
            Self::Win
        } else {
            Self::Lose
        }
    }

    /// Payout credited back to the player for this outcome.
    ///
    /// A push refunds the bet; blackjack, doubled wins, and plain wins all
    /// return twice the bet riding on the hand (for a doubled hand the bet
    /// itself was already doubled). Busts and losses pay nothing; the bet
    /// left the bankroll when it was placed.
    #[must_use]
    pub const fn payout(self, bet: f64) -> f64 {
        match self {
            Self::Push => bet,
            Self::Blackjack | Self::WinDouble | Self::Win => bet * 2.0,
            Self::Bust | Self::Lose => 0.0,
        }
    }
}

/// Settlement for a single player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerOutcome {
    /// The player's seat index.
    pub seat: usize,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The bet that was riding on the hand (doubled if the player doubled).
    pub bet: f64,
    /// The amount credited back to the bankroll.
    pub payout: f64,
    /// The player's final hand value.
    pub hand_value: u8,
}

/// Settlement for the entire round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Per-player settlements, in betting order.
    pub outcomes: Vec<PlayerOutcome>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
