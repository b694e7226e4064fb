use tracing::debug;

use crate::error::{Action, ActionError};

use super::{Game, GameState};

impl Game {
    /// Sets the bet, clamped to the bankroll.
    ///
    /// Returns the bet actually recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn set_bet(&mut self, amount: usize) -> Result<usize, ActionError> {
        self.ensure_state(Action::Bet, GameState::Betting)?;
        self.bet = amount.min(self.bankroll);
        Ok(self.bet)
    }

    /// Moves the bet by `delta`, clamped to `0..=bankroll`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn adjust_bet(&mut self, delta: isize) -> Result<usize, ActionError> {
        let amount = self.bet.saturating_add_signed(delta);
        self.set_bet(amount)
    }

    /// Raises the bet by one bet step.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn raise_bet(&mut self) -> Result<usize, ActionError> {
        self.set_bet(self.bet.saturating_add(self.options.bet_step))
    }

    /// Lowers the bet by one bet step.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn lower_bet(&mut self) -> Result<usize, ActionError> {
        self.set_bet(self.bet.saturating_sub(self.options.bet_step))
    }

    /// Stakes the bet and deals two cards each to the player and the dealer.
    ///
    /// Cards are drawn player, player, dealer, dealer; the dealer's first card
    /// is the up card. If either side holds a natural the round is settled
    /// immediately and the game is back in betting state when this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, or if the bet is
    /// zero or exceeds the bankroll.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        self.ensure_state(Action::Deal, GameState::Betting)?;
        if self.bet == 0 || self.bet > self.bankroll {
            debug!(bet = self.bet, bankroll = self.bankroll, "deal rejected");
            return Err(ActionError::InvalidBet);
        }

        self.bankroll -= self.bet;
        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            let card = self.shoe.draw();
            self.player.add_card(card);
        }
        for _ in 0..2 {
            let card = self.shoe.draw();
            self.dealer.add_card(card);
        }

        debug!(
            bet = self.bet,
            player = self.player.value(),
            up_card = ?self.dealer.up_card(),
            "dealt"
        );

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.resolve_blackjack();
        } else {
            self.state = GameState::PlayerTurn;
            self.message.clear();
            self.message.push_str("Your move.");
        }

        Ok(())
    }
}
