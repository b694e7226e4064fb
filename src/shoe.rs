//! The shoe: undrawn cards from one or more shuffled decks.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ConfigError;

/// Undrawn cards, regenerated from the configured universe when depleted.
///
/// The universe is either one unique 52-card deck or `decks` concatenated
/// decks. Every regeneration rebuilds that universe from scratch and shuffles
/// it, so no card identity carries over between generations.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    unique: bool,
    decks: u8,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds and shuffles a shoe.
    ///
    /// `decks` is ignored when `unique` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDeckCount`] if `decks` is zero outside
    /// unique mode.
    pub fn new(unique: bool, decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if !unique && decks == 0 {
            return Err(ConfigError::InvalidDeckCount);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decks = if unique { 1 } else { decks };
        let cards = Self::build(decks, &mut rng);

        Ok(Self {
            cards,
            unique,
            decks,
            reshuffles: 0,
            rng,
        })
    }

    /// Creates and shuffles the card universe.
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
        cards
    }

    /// Replaces the remaining cards with a freshly shuffled universe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::build(self.decks, &mut self.rng);
        self.reshuffles += 1;
        debug!(
            cards = self.cards.len(),
            generation = self.reshuffles,
            "shoe reshuffled"
        );
    }

    /// Reshuffles if fewer than `threshold` cards remain.
    ///
    /// Returns `true` if a reshuffle was performed.
    pub fn reshuffle_if_low(&mut self, threshold: usize) -> bool {
        if self.cards.len() < threshold {
            self.reshuffle();
            true
        } else {
            false
        }
    }

    /// Draws the next card, reshuffling first if the shoe is empty.
    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.reshuffle();
        }
    }

    /// Replaces the undrawn cards so that the next draws return `draws` in order.
    ///
    /// Once the stacked cards run out the shoe regenerates as usual. Intended
    /// for replays and deterministic tests.
    pub fn stack(&mut self, draws: &[Card]) {
        self.cards.clear();
        self.cards.extend(draws.iter().rev());
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Size of a freshly built shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns how many times the shoe has been regenerated.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }

    /// Returns whether the shoe is a single deck of unique cards.
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.unique
    }

    /// Returns the number of decks in the universe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the undrawn cards; the last one is drawn next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
