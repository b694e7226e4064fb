//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the betting, dealing, player
//! turn, dealer turn and settlement of each round, against a [`Shoe`] that
//! reshuffles itself when it runs low. Rendering and input belong to the
//! caller, which reads [`Game::snapshot`] and calls the action methods.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(GameOptions::default(), 42).unwrap();
//! game.set_bet(20).unwrap();
//! game.deal().unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.state(), GameState::Betting);
//! assert!(game.last_result().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{Action, ActionError, ConfigError};
pub use game::{ActionAvailability, Game, GameState, Snapshot};
pub use hand::{Hand, HandValue, evaluate};
pub use options::{GameOptions, RoundingMode};
pub use result::{Outcome, RoundResult};
pub use shoe::Shoe;
