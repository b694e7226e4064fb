use tracing::{debug, info};

use crate::hand::BLACKJACK;
use crate::options::RoundingMode;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// Dealer stands at or above this total.
const DEALER_STANDS_AT: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Returns whether the dealer must take another card.
    ///
    /// The dealer draws below 17, and on a soft 17 when the table hits soft 17.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.evaluate();
        value.total < DEALER_STANDS_AT
            || (value.total == DEALER_STANDS_AT && value.soft && self.options.dealer_hits_soft_17)
    }

    /// Dealer plays their hand according to the table rules.
    pub(super) fn dealer_play(&mut self) {
        let mut drawn = 0_usize;

        while self.state == GameState::DealerTurn && self.dealer_must_draw() {
            let card = self.shoe.draw();
            self.dealer.add_card(card);
            drawn += 1;
        }

        debug!(drawn, dealer = self.dealer.value(), "dealer stands");
    }

    /// Stake plus winnings for `ratio`, saturating at `usize::MAX`.
    fn stake_and_winnings(&self, ratio: f64) -> usize {
        self.bet.saturating_add(self.winnings(ratio))
    }

    /// Winnings for `ratio`, on top of the returned stake.
    fn winnings(&self, ratio: f64) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = (self.bet as f64) * ratio;
        round_amount(amount, self.options.rounding)
    }

    /// Settles a round in which a natural was dealt.
    pub(super) fn resolve_blackjack(&mut self) -> RoundResult {
        let (outcome, payout) = match (self.player.is_blackjack(), self.dealer.is_blackjack()) {
            (true, true) => (Outcome::Push, self.bet),
            (true, false) => (
                Outcome::PlayerBlackjack,
                self.stake_and_winnings(self.options.blackjack_pays),
            ),
            _ => (Outcome::DealerBlackjack, 0),
        };
        self.settle(outcome, payout)
    }

    /// Settles a round after a player bust or the dealer's turn.
    pub(super) fn resolve_normal(&mut self) -> RoundResult {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let win = self.stake_and_winnings(self.options.win_pays);

        let (outcome, payout) = if player_value > BLACKJACK {
            (Outcome::PlayerBust, 0)
        } else if dealer_value > BLACKJACK {
            (Outcome::DealerBust, win)
        } else if player_value > dealer_value {
            (Outcome::PlayerWin, win)
        } else if player_value < dealer_value {
            (Outcome::DealerWin, 0)
        } else {
            (Outcome::Push, self.bet)
        };
        self.settle(outcome, payout)
    }

    /// Credits the payout, records the result and reopens betting.
    fn settle(&mut self, outcome: Outcome, payout: usize) -> RoundResult {
        self.state = GameState::Resolved;
        self.bankroll = self.bankroll.saturating_add(payout);

        let net = isize::try_from(payout)
            .unwrap_or(isize::MAX)
            .saturating_sub(isize::try_from(self.bet).unwrap_or(isize::MAX));

        let result = RoundResult {
            outcome,
            bet: self.bet,
            payout,
            net,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };

        info!(
            ?outcome,
            bet = self.bet,
            payout,
            bankroll = self.bankroll,
            "round resolved"
        );

        self.message.clear();
        self.message.push_str(outcome.message());
        self.last_result = Some(result);

        self.state = GameState::Betting;
        self.bet = self.bet.min(self.bankroll);
        self.shoe.reshuffle_if_low(self.options.low_water_mark);

        result
    }
}
