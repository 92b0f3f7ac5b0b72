//! Multi-deck shoe with a randomized cut and depletion-triggered rebuild.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// Deepest cut position, counted back from the top of the shuffled stack.
const CUT_BACK_MAX: usize = 80;
/// Shallowest cut position, counted back from the top of the shuffled stack.
const CUT_BACK_MIN: usize = 60;

/// The combined, shuffled set of decks that cards are dealt from.
///
/// Cards are drawn from the end of the stack. The shoe owns its RNG so that
/// a mid-round rebuild reshuffles from the same seeded stream.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards in stack order; draws pop from the end.
    pub cards: Vec<Card>,
    /// Number of decks the shoe is built from.
    decks: u8,
    /// Rebuild threshold: a draw finding fewer cards than this rebuilds
    /// first. Zero disables rebuilding.
    reshuffle_at: usize,
    /// Random number generator for shuffles and cuts.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled and cut shoe with the given seed.
    #[must_use]
    pub fn new(decks: u8, reshuffle_at: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::build(decks, &mut rng);

        Self {
            cards,
            decks,
            reshuffle_at,
            rng,
        }
    }

    /// Builds, shuffles, and cuts a full set of `decks` decks.
    fn build(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);

        // Rotate by a random cut so the bottom of the shuffled stack is not
        // the first region dealt from.
        let len = cards.len();
        let high = len.saturating_sub(CUT_BACK_MIN);
        let low = len.saturating_sub(CUT_BACK_MAX);
        if high > 0 {
            let cut = rng.random_range(low..=high);
            cards.rotate_left(cut);
        }

        cards
    }

    /// Discards the remaining cards and rebuilds the full shoe.
    pub fn rebuild(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
    }

    /// Rebuilds the shoe if the stack has dropped below the threshold.
    ///
    /// Call before every draw; returns `true` when a rebuild happened so the
    /// caller can reset its running count and notify observers.
    pub fn replenish_if_needed(&mut self) -> bool {
        if self.reshuffle_at > 0 && self.cards.len() < self.reshuffle_at {
            self.rebuild();
            true
        } else {
            false
        }
    }

    /// Draws the next card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}
