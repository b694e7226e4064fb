use crate::card::Card;
use crate::error::{Action, ActionError};
use crate::result::RoundResult;

use super::{Game, GameState};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(Action::Hit, GameState::PlayerTurn)?;

        let card = self.shoe.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve_normal();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer plays out their hand and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_state(Action::Stand, GameState::PlayerTurn)?;
        Ok(self.finish_with_dealer())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, the hand does
    /// not hold exactly two cards, or the bankroll cannot cover the bet again.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_state(Action::Double, GameState::PlayerTurn)?;

        // Can only double on first two cards
        if self.player.len() != 2 {
            return Err(ActionError::CannotDouble);
        }
        if self.bankroll < self.bet {
            return Err(ActionError::InsufficientFunds);
        }

        self.bankroll -= self.bet;
        self.bet *= 2;

        let card = self.shoe.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve_normal();
        } else {
            self.finish_with_dealer();
        }

        Ok(card)
    }

    fn finish_with_dealer(&mut self) -> RoundResult {
        self.state = GameState::DealerTurn;
        self.dealer_play();
        self.resolve_normal()
    }
}
