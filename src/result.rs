//! Round outcomes and settlement results.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Tie, including both sides holding a natural.
    Push,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player total beat the dealer.
    PlayerWin,
    /// Dealer total beat the player.
    DealerWin,
}

impl Outcome {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! You win.",
            Self::DealerBlackjack => "Dealer has Blackjack. You lose.",
            Self::Push => "Push.",
            Self::PlayerBust => "Too much. You lose.",
            Self::DealerBust => "Dealer busts. You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "You lose.",
        }
    }

    /// Returns whether the player is paid winnings on top of the stake.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin
        )
    }
}

/// Settlement of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Total amount staked, including a double down.
    pub bet: usize,
    /// Amount credited back to the bankroll (stake plus winnings).
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}
