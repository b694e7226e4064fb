//! Error types for engine construction and player actions.

use thiserror::Error;

use crate::game::GameState;

/// Errors that reject a configuration at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Zero decks requested while unique-card mode is off.
    #[error("deck count must be at least 1 unless unique-card mode is on")]
    InvalidDeckCount,
    /// A payout ratio is negative or not a finite number.
    #[error("payout ratio `{field}` must be a finite, non-negative number")]
    InvalidPayout {
        /// Name of the offending option.
        field: &'static str,
    },
}

/// Player action that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Changing the bet.
    Bet,
    /// Dealing a new round.
    Deal,
    /// Drawing a card.
    Hit,
    /// Ending the player's turn.
    Stand,
    /// Doubling down.
    Double,
    /// Reshuffling the shoe by hand.
    Reshuffle,
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::Bet => "bet",
            Self::Deal => "deal",
            Self::Hit => "hit",
            Self::Stand => "stand",
            Self::Double => "double",
            Self::Reshuffle => "reshuffle",
        })
    }
}

/// Errors that can occur during player actions.
///
/// A rejected action never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not valid in the current state.
    #[error("cannot {action} while in {state:?}")]
    InvalidState {
        /// The rejected action.
        action: Action,
        /// State the game was in.
        state: GameState,
    },
    /// The bet is zero or exceeds the bankroll.
    #[error("correct the bet")]
    InvalidBet,
    /// Cannot double down on this hand.
    #[error("can only double on the first two cards")]
    CannotDouble,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
}
