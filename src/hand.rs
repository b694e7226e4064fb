//! Hand representation and blackjack valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, Card};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

const fn card_value(rank: u8) -> u8 {
    match rank {
        ACE => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// The best blackjack value of a sequence of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    /// Best total: the highest value not above 21, or the lowest bust value.
    pub total: u8,
    /// Whether an ace is still counted as 11.
    pub soft: bool,
    /// Whether the cards are a natural (two cards totalling 21).
    pub blackjack: bool,
}

/// Evaluates a sequence of cards.
///
/// Every ace starts at 11 and is demoted to 1, one at a time, while the total
/// is above 21.
///
/// ```
/// use bjround::{Card, Suit, hand::evaluate};
///
/// let value = evaluate(&[
///     Card::new(Suit::Spades, 1),
///     Card::new(Suit::Hearts, 1),
///     Card::new(Suit::Clubs, 9),
/// ]);
/// assert_eq!(value.total, 21);
/// assert!(value.soft);
/// assert!(!value.blackjack);
/// ```
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += u32::from(card_value(card.rank));
    }

    while total > u32::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let total = u8::try_from(total).unwrap_or(u8::MAX);
    HandValue {
        total,
        soft: aces > 0 && total <= BLACKJACK,
        blackjack: cards.len() == 2 && total == BLACKJACK,
    }
}

/// The cards held by the player or the dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn evaluate(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.evaluate().total
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.evaluate().soft
    }

    /// Returns whether the hand is a natural blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.evaluate().blackjack
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the visible card (first card dealt).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Value of the up card alone, used while the hole card is face down.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        self.up_card().map_or(0, |c| card_value(c.rank))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&rank| Card::new(Suit::Spades, rank)).collect()
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(evaluate(&hand(&[11, 12])).total, 20);
        assert_eq!(evaluate(&hand(&[13, 5])).total, 15);
    }

    #[test]
    fn natural_requires_exactly_two_cards() {
        let natural = evaluate(&hand(&[1, 13]));
        assert_eq!(natural.total, 21);
        assert!(natural.blackjack);
        assert!(natural.soft);

        let three_card = evaluate(&hand(&[7, 7, 7]));
        assert_eq!(three_card.total, 21);
        assert!(!three_card.blackjack);
    }

    #[test]
    fn each_ace_is_demoted_separately() {
        assert_eq!(evaluate(&hand(&[1, 1])).total, 12);
        assert_eq!(evaluate(&hand(&[1, 1, 1, 1])).total, 14);
        let value = evaluate(&hand(&[1, 1, 9]));
        assert_eq!(value.total, 21);
        assert!(value.soft);
        let value = evaluate(&hand(&[1, 1, 9, 10]));
        assert_eq!(value.total, 21);
        assert!(!value.soft);
    }

    #[test]
    fn hard_seventeen_with_ace_is_not_soft() {
        let value = evaluate(&hand(&[1, 6, 10]));
        assert_eq!(value.total, 17);
        assert!(!value.soft);

        let value = evaluate(&hand(&[1, 6]));
        assert_eq!(value.total, 17);
        assert!(value.soft);
    }

    #[test]
    fn empty_hand_is_zero() {
        assert_eq!(evaluate(&[]), HandValue::default());
    }

    #[test]
    fn long_bust_hands_are_not_capped() {
        let mut ranks = [13; 26];
        ranks[25] = ACE;
        let value = evaluate(&hand(&ranks));
        assert_eq!(value.total, 251);
        assert!(!value.soft);
    }

    #[test]
    fn dealer_view_shows_up_card_only() {
        let mut dealer = Hand::new();
        dealer.add_card(Card::new(Suit::Hearts, 1));
        dealer.add_card(Card::new(Suit::Clubs, 6));

        assert_eq!(dealer.visible_value(), 11);
        assert_eq!(dealer.value(), 17);
        assert!(dealer.is_soft());

        dealer.clear();
        assert!(dealer.is_empty());
        assert_eq!(dealer.visible_value(), 0);
    }

    /// Exhaustive best total over every ace assignment.
    fn brute_force_total(ranks: &[u8]) -> u8 {
        let aces = ranks.iter().filter(|&&r| r == ACE).count();
        let base: u32 = ranks
            .iter()
            .map(|&r| if r == ACE { 1 } else { u32::from(card_value(r)) })
            .sum();
        let candidates = (0..=aces).map(|high| base + 10 * high as u32);
        let best_safe = candidates.clone().filter(|&t| t <= 21).max();
        best_safe.unwrap_or_else(|| candidates.min().unwrap_or(base)) as u8
    }

    proptest! {
        #[test]
        fn total_is_best_assignment(ranks in prop::collection::vec(1u8..=13, 1..10)) {
            let value = evaluate(&hand(&ranks));
            prop_assert_eq!(value.total, brute_force_total(&ranks));
        }

        #[test]
        fn never_busts_when_a_safe_assignment_exists(ranks in prop::collection::vec(1u8..=13, 1..10)) {
            let all_low: u32 = ranks
                .iter()
                .map(|&r| if r == ACE { 1 } else { u32::from(card_value(r)) })
                .sum();
            let value = evaluate(&hand(&ranks));
            if all_low <= 21 {
                prop_assert!(value.total <= BLACKJACK);
            } else {
                prop_assert_eq!(u32::from(value.total), all_low);
            }
        }

        #[test]
        fn evaluation_is_idempotent(ranks in prop::collection::vec(1u8..=13, 0..8)) {
            let cards = hand(&ranks);
            prop_assert_eq!(evaluate(&cards), evaluate(&cards));
        }
    }
}
