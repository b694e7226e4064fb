//! Card types and asset-name parsing.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Single-letter code (`S`, `H`, `D`, `C`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Best-effort mapping of an asset file name to a card.
    ///
    /// Case, separators and the file extension are ignored. Accepted shapes
    /// include `kc`, `10h`, `s3`, `K_Clubs.png`, `hearts-10`, `diamonds_q`,
    /// `Queen of Hearts.webp` and the common `speads` misspelling.
    ///
    /// As a last resort any `s`, `h`, `d` or `c` counts as a suit, so stray
    /// names such as `back.png` still map to a card. Callers that keep card
    /// backs next to faces should set those aside before parsing.
    ///
    /// ```
    /// use bjround::{Card, Suit};
    ///
    /// assert_eq!(Card::parse_name("K_Clubs.png"), Some(Card::new(Suit::Clubs, 13)));
    /// assert_eq!(Card::parse_name("hearts-10"), Some(Card::new(Suit::Hearts, 10)));
    /// assert_eq!(Card::parse_name("joker.png"), None);
    /// ```
    #[must_use]
    pub fn parse_name(name: &str) -> Option<Self> {
        let base = file_stem(name).trim().to_ascii_lowercase();
        let base = base.as_str();

        if let Some(card) = parse_compact(base) {
            return Some(card);
        }

        let mut rank = None;
        let mut suit = None;
        for token in base.split(|c: char| !c.is_ascii_alphanumeric()) {
            if rank.is_none() {
                rank = rank_from_word(token);
            }
            if suit.is_none() {
                suit = suit_from_word(token);
            }
        }
        if let (Some(rank), Some(suit)) = (rank, suit) {
            return Some(Self::new(suit, rank));
        }

        parse_embedded(base)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            ACE => f.write_str("A")?,
            JACK => f.write_str("J")?,
            QUEEN => f.write_str("Q")?,
            KING => f.write_str("K")?,
            rank => write!(f, "{rank}")?,
        }
        write!(f, "{}", self.suit.code())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const SUIT_WORDS: [(&str, Suit); 14] = [
    ("spades", Suit::Spades),
    ("spade", Suit::Spades),
    ("speads", Suit::Spades),
    ("spead", Suit::Spades),
    ("hearts", Suit::Hearts),
    ("heart", Suit::Hearts),
    ("diamonds", Suit::Diamonds),
    ("diamond", Suit::Diamonds),
    ("clubs", Suit::Clubs),
    ("club", Suit::Clubs),
    ("s", Suit::Spades),
    ("h", Suit::Hearts),
    ("d", Suit::Diamonds),
    ("c", Suit::Clubs),
];

const RANK_WORDS: [(&str, u8); 5] = [
    ("ace", ACE),
    ("jack", JACK),
    ("queen", QUEEN),
    ("king", KING),
    ("10", 10),
];

fn file_stem(name: &str) -> &str {
    let name = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}

fn suit_from_word(word: &str) -> Option<Suit> {
    SUIT_WORDS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, suit)| suit)
}

fn rank_from_letter(letter: char) -> Option<u8> {
    match letter {
        'a' => Some(ACE),
        't' => Some(10),
        'j' => Some(JACK),
        'q' => Some(QUEEN),
        'k' => Some(KING),
        '2'..='9' => letter.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

fn rank_from_word(word: &str) -> Option<u8> {
    if let Some(&(_, rank)) = RANK_WORDS.iter().find(|(w, _)| *w == word) {
        return Some(rank);
    }
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => rank_from_letter(letter),
        _ => None,
    }
}

fn suit_from_letter(letter: char) -> Option<Suit> {
    match letter {
        's' => Some(Suit::Spades),
        'h' => Some(Suit::Hearts),
        'd' => Some(Suit::Diamonds),
        'c' => Some(Suit::Clubs),
        _ => None,
    }
}

/// Short joined forms: `kc`, `10h`, `a s`, and the reversed `s3`, `h10`.
fn parse_compact(base: &str) -> Option<Card> {
    let compact: alloc::string::String = base.chars().filter(|c| !c.is_whitespace()).collect();
    let compact = compact.as_str();

    let split_rank = |s: &str| -> Option<u8> {
        if s == "10" {
            Some(10)
        } else {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => rank_from_letter(letter),
                _ => None,
            }
        }
    };

    let last = compact.chars().last()?;
    if let Some(suit) = suit_from_letter(last) {
        if let Some(rank) = split_rank(&compact[..compact.len() - 1]) {
            return Some(Card::new(suit, rank));
        }
    }

    let first = compact.chars().next()?;
    if let Some(suit) = suit_from_letter(first) {
        if let Some(rank) = split_rank(&compact[1..]) {
            return Some(Card::new(suit, rank));
        }
    }

    None
}

/// Words run together without separators, e.g. `heartsqueen`, `10ofclubs`.
///
/// Full suit words are tried first; a lone `s`, `h`, `d` or `c` anywhere in
/// the name is the fallback, so `xs9` reads as the nine of spades.
fn parse_embedded(base: &str) -> Option<Card> {
    let (words, letters) = SUIT_WORDS.split_at(SUIT_WORDS.len() - 4);
    embedded_with(base, words).or_else(|| embedded_with(base, letters))
}

fn embedded_with(base: &str, suits: &[(&str, Suit)]) -> Option<Card> {
    let positions = move || {
        base.char_indices().filter_map(move |(at, _)| {
            let rest = &base[at..];
            suits
                .iter()
                .find(|(word, _)| rest.starts_with(word))
                .map(|&(word, suit)| (at, word.len(), suit))
        })
    };

    let suit_first = positions().find_map(|(at, len, suit)| {
        find_rank(&base[at + len..]).map(|rank| Card::new(suit, rank))
    });
    suit_first.or_else(|| {
        positions().find_map(|(at, _, suit)| find_rank(&base[..at]).map(|rank| Card::new(suit, rank)))
    })
}

fn find_rank(s: &str) -> Option<u8> {
    s.char_indices().find_map(|(index, letter)| {
        let rest = &s[index..];
        RANK_WORDS
            .iter()
            .find(|(word, _)| rest.starts_with(word))
            .map(|&(_, rank)| rank)
            .or_else(|| rank_from_letter(letter))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_short_codes() {
        assert_eq!(Card::new(Suit::Spades, ACE).to_string(), "AS");
        assert_eq!(Card::new(Suit::Hearts, 10).to_string(), "10H");
        assert_eq!(Card::new(Suit::Diamonds, KING).to_string(), "KD");
        assert_eq!(Card::new(Suit::Clubs, 7).to_string(), "7C");
    }

    #[test]
    fn parses_compact_names() {
        assert_eq!(Card::parse_name("kc"), Some(Card::new(Suit::Clubs, KING)));
        assert_eq!(Card::parse_name("AS.png"), Some(Card::new(Suit::Spades, ACE)));
        assert_eq!(Card::parse_name("10h"), Some(Card::new(Suit::Hearts, 10)));
        assert_eq!(Card::parse_name("th"), Some(Card::new(Suit::Hearts, 10)));
        assert_eq!(Card::parse_name("s3"), Some(Card::new(Suit::Spades, 3)));
        assert_eq!(Card::parse_name("h10"), Some(Card::new(Suit::Hearts, 10)));
    }

    #[test]
    fn parses_separated_words_in_any_order() {
        assert_eq!(
            Card::parse_name("K_Clubs.png"),
            Some(Card::new(Suit::Clubs, KING))
        );
        assert_eq!(
            Card::parse_name("10-Hearts.jpg"),
            Some(Card::new(Suit::Hearts, 10))
        );
        assert_eq!(
            Card::parse_name("diamonds_q"),
            Some(Card::new(Suit::Diamonds, QUEEN))
        );
        assert_eq!(
            Card::parse_name("clubs_a"),
            Some(Card::new(Suit::Clubs, ACE))
        );
        assert_eq!(
            Card::parse_name("speads_3"),
            Some(Card::new(Suit::Spades, 3))
        );
        assert_eq!(
            Card::parse_name("Queen of Hearts.webp"),
            Some(Card::new(Suit::Hearts, QUEEN))
        );
    }

    #[test]
    fn parses_words_run_together() {
        assert_eq!(
            Card::parse_name("heartsqueen"),
            Some(Card::new(Suit::Hearts, QUEEN))
        );
        assert_eq!(
            Card::parse_name("cards/10ofclubs.png"),
            Some(Card::new(Suit::Clubs, 10))
        );
    }

    #[test]
    fn single_letter_suit_is_the_last_resort() {
        assert_eq!(Card::parse_name("xs9"), Some(Card::new(Suit::Spades, 9)));
        assert_eq!(Card::parse_name("xd7"), Some(Card::new(Suit::Diamonds, 7)));
        assert_eq!(Card::parse_name("q-xh"), Some(Card::new(Suit::Hearts, QUEEN)));
        assert_eq!(Card::parse_name("back.png"), Some(Card::new(Suit::Clubs, KING)));
    }

    #[test]
    fn rejects_non_card_names() {
        assert_eq!(Card::parse_name("joker.png"), None);
        assert_eq!(Card::parse_name("marker"), None);
        assert_eq!(Card::parse_name(""), None);
        assert_eq!(Card::parse_name("font.ttf"), None);
    }
}
