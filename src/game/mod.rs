//! Game engine and state management.

use alloc::string::String;

use tracing::debug;

use crate::error::{Action, ActionError, ConfigError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{ActionAvailability, GameState, Snapshot};

const WELCOME: &str = "Place your bet and deal.";

/// A single-player blackjack engine that manages the bankroll, the shoe and
/// the round flow.
///
/// The game owns the shoe and both hands. Every action runs to completion,
/// including the dealer's drawing, before it returns, and a rejected action
/// leaves the game untouched. Use [`GameOptions`] to configure the table.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards in the shoe.
    shoe: Shoe,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Money not currently staked.
    bankroll: usize,
    /// Bet for the next or current round.
    bet: usize,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Message for the player.
    message: String,
    /// Settlement of the last finished round.
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The starting bet is clamped to the starting bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`GameOptions::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.state(), GameState::Betting);
    /// assert_eq!(game.bankroll(), 200);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::new(options.unique_cards, options.decks, seed)?;

        Ok(Self {
            shoe,
            state: GameState::Betting,
            bankroll: options.starting_bankroll,
            bet: options.starting_bet.min(options.starting_bankroll),
            player: Hand::new(),
            dealer: Hand::new(),
            message: String::from(WELCOME),
            last_result: None,
            options,
        })
    }

    fn ensure_state(&self, action: Action, expected: GameState) -> Result<(), ActionError> {
        if self.state == expected {
            Ok(())
        } else {
            debug!(%action, state = ?self.state, "action rejected");
            Err(ActionError::InvalidState {
                action,
                state: self.state,
            })
        }
    }

    /// Reshuffles the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ActionError> {
        self.ensure_state(Action::Reshuffle, GameState::Betting)?;
        self.shoe.reshuffle();
        Ok(())
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the current bet.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the message for the player.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the settlement of the last finished round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for stacking cards in replays and tests.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns whether the player can no longer place any bet.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.bankroll == 0
    }

    /// Returns whether the dealer's hole card is face down.
    #[must_use]
    pub fn hole_hidden(&self) -> bool {
        self.state == GameState::PlayerTurn && self.dealer.len() >= 2
    }

    /// Returns a read-only view of the game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let hole_hidden = self.hole_hidden();
        let dealer_total = if hole_hidden {
            self.dealer.visible_value()
        } else {
            self.dealer.value()
        };

        Snapshot {
            bankroll: self.bankroll,
            bet: self.bet,
            state: self.state,
            player_cards: self.player.cards().to_vec(),
            dealer_cards: self.dealer.cards().to_vec(),
            hole_hidden,
            player_total: self.player.value(),
            dealer_total,
            message: self.message.clone(),
            last_result: self.last_result,
            cards_remaining: self.shoe.remaining(),
        }
    }

    /// Returns which actions are currently accepted.
    #[must_use]
    pub fn available_actions(&self) -> ActionAvailability {
        match self.state {
            GameState::Betting => ActionAvailability {
                deal: self.bet > 0 && self.bet <= self.bankroll,
                lower_bet: self.bet > 0,
                raise_bet: self.bet < self.bankroll,
                ..ActionAvailability::default()
            },
            GameState::PlayerTurn => ActionAvailability {
                hit: true,
                stand: true,
                double: self.player.len() == 2 && self.bankroll >= self.bet,
                ..ActionAvailability::default()
            },
            GameState::DealerTurn | GameState::Resolved => ActionAvailability::default(),
        }
    }
}
