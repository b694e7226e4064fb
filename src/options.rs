//! Game configuration options.

use crate::error::ConfigError;

/// Rounding mode for fractional winnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack game.
///
/// Options are fixed for the lifetime of a [`Game`](crate::Game). Use the
/// builder pattern to customize them:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_unique_cards(false)
///     .with_decks(6)
///     .with_blackjack_pays(1.5)
///     .with_dealer_hits_soft_17(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Bankroll at the start of the session.
    pub starting_bankroll: usize,
    /// Bet preset at the start of the session.
    pub starting_bet: usize,
    /// Amount the bet moves by on raise/lower.
    pub bet_step: usize,
    /// Build the shoe from a single unique 52-card deck.
    pub unique_cards: bool,
    /// Number of decks in the shoe. Ignored when `unique_cards` is set.
    pub decks: u8,
    /// Whether the dealer draws on soft 17.
    pub dealer_hits_soft_17: bool,
    /// Winnings per unit staked on an ordinary win (typically 1.0).
    pub win_pays: f64,
    /// Winnings per unit staked on a natural (typically 1.5).
    pub blackjack_pays: f64,
    /// Reshuffle after a round when fewer cards than this remain.
    pub low_water_mark: usize,
    /// Rounding mode for fractional winnings.
    pub rounding: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 200,
            starting_bet: 10,
            bet_step: 5,
            unique_cards: true,
            decks: 6,
            dealer_hits_soft_17: false,
            win_pays: 1.0,
            blackjack_pays: 1.5,
            low_water_mark: 15,
            rounding: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count is zero outside unique-card mode, or
    /// if a payout ratio is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.unique_cards && self.decks == 0 {
            return Err(ConfigError::InvalidDeckCount);
        }
        for (field, ratio) in [
            ("win_pays", self.win_pays),
            ("blackjack_pays", self.blackjack_pays),
        ] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(ConfigError::InvalidPayout { field });
            }
        }
        Ok(())
    }

    /// Sets the starting bankroll.
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the starting bet.
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: usize) -> Self {
        self.starting_bet = bet;
        self
    }

    /// Sets the bet step.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_bet_step(25);
    /// assert_eq!(options.bet_step, 25);
    /// ```
    #[must_use]
    pub const fn with_bet_step(mut self, step: usize) -> Self {
        self.bet_step = step;
        self
    }

    /// Sets whether the shoe is a single deck of unique cards.
    #[must_use]
    pub const fn with_unique_cards(mut self, unique: bool) -> Self {
        self.unique_cards = unique;
        self
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits soft 17.
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the payout ratio for ordinary wins.
    #[must_use]
    pub const fn with_win_pays(mut self, ratio: f64) -> Self {
        self.win_pays = ratio;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the low-water mark for reshuffling between rounds.
    #[must_use]
    pub const fn with_low_water_mark(mut self, cards: usize) -> Self {
        self.low_water_mark = cards;
        self
    }

    /// Sets the rounding mode for fractional winnings.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(options.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameOptions::default().validate(), Ok(()));
    }

    #[test]
    fn zero_decks_only_rejected_outside_unique_mode() {
        let unique = GameOptions::default().with_unique_cards(true).with_decks(0);
        assert_eq!(unique.validate(), Ok(()));

        let shoe = GameOptions::default().with_unique_cards(false).with_decks(0);
        assert_eq!(shoe.validate(), Err(ConfigError::InvalidDeckCount));
    }

    #[test]
    fn negative_or_nan_payouts_rejected() {
        assert_eq!(
            GameOptions::default().with_win_pays(-1.0).validate(),
            Err(ConfigError::InvalidPayout { field: "win_pays" })
        );
        assert_eq!(
            GameOptions::default().with_blackjack_pays(f64::NAN).validate(),
            Err(ConfigError::InvalidPayout {
                field: "blackjack_pays"
            })
        );
        assert_eq!(GameOptions::default().with_win_pays(0.0).validate(), Ok(()));
    }
}
