//! Game state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundResult;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Accepting bet changes and a deal.
    Betting,
    /// Waiting for the player to hit, stand or double.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; the game returns to betting in the same action.
    Resolved,
}

/// Read-only view of the game for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current bankroll.
    pub bankroll: usize,
    /// Current bet.
    pub bet: usize,
    /// Current state.
    pub state: GameState,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The dealer's cards, up card first.
    pub dealer_cards: Vec<Card>,
    /// Whether the dealer's hole card (the second card) is face down.
    pub hole_hidden: bool,
    /// The player's hand value.
    pub player_total: u8,
    /// The dealer's hand value; only the up card counts while the hole is hidden.
    pub dealer_total: u8,
    /// Message for the player.
    pub message: String,
    /// Settlement of the last finished round.
    pub last_result: Option<RoundResult>,
    /// Cards left in the shoe.
    pub cards_remaining: usize,
}

/// Which actions are currently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionAvailability {
    /// A new round can be dealt.
    pub deal: bool,
    /// The player may hit.
    pub hit: bool,
    /// The player may stand.
    pub stand: bool,
    /// The player may double down.
    pub double: bool,
    /// The bet can be lowered.
    pub lower_bet: bool,
    /// The bet can be raised.
    pub raise_bet: bool,
}
