//! Playing cards.
//!
//! A `Card` is a (rank, suit) pair with value semantics: two physical
//! copies of the same card compare equal, and a hand may hold both.
//! The text form is `RANK|SUIT`, e.g. `A|S`, `10|H`, `J|D`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Card rank, in pack order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in pack order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Text symbol used in the `RANK|SUIT` form.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.symbol() == s)
    }
}

/// Card suit, in pack order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in pack order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Text symbol used in the `RANK|SUIT` form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Suit::Clubs),
            "D" => Some(Suit::Diamonds),
            "H" => Some(Suit::Hearts),
            "S" => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// The two Jack behaviours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JackKind {
    /// Spades and Hearts: removes an opponent piece ("anti-wild").
    OneEyed,
    /// Clubs and Diamonds: places a piece on any open cell ("wild").
    TwoEyed,
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Check whether this card is a Jack of either kind.
    #[must_use]
    pub const fn is_jack(self) -> bool {
        matches!(self.rank, Rank::Jack)
    }

    /// Jack behaviour, or `None` for a normal card.
    #[must_use]
    pub const fn jack_kind(self) -> Option<JackKind> {
        match (self.rank, self.suit) {
            (Rank::Jack, Suit::Spades | Suit::Hearts) => Some(JackKind::OneEyed),
            (Rank::Jack, Suit::Clubs | Suit::Diamonds) => Some(JackKind::TwoEyed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Card(s.to_string());
        let (rank, suit) = s.trim().split_once('|').ok_or_else(invalid)?;
        let rank = Rank::from_symbol(rank).ok_or_else(invalid)?;
        let suit = Suit::from_symbol(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parse a list of `RANK|SUIT` tokens, failing on the first bad one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
