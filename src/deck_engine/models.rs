use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::deck_engine::error::CardParseError;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// Canonical suit order of an unshuffled deck.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs    => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts   => 'H',
            Suit::Spades   => 'S',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs    => "CLUBS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Hearts   => "HEARTS",
            Suit::Spades   => "SPADES",
        }
    }

    fn from_letter(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Rank 2..=14 where 14 = Ace. Only valid ranks can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

const RANK_SYMBOLS: [&str; 13] = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A"];

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// `None` outside 2..=14.
    pub fn new(value: u8) -> Option<Rank> {
        (Self::TWO.0..=Self::ACE.0).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All ranks in deck order, 2 up to Ace.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::TWO.0..=Self::ACE.0).map(Rank)
    }

    pub fn symbol(self) -> &'static str {
        RANK_SYMBOLS[usize::from(self.0 - Self::TWO.0)]
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            11 => "JACK",
            12 => "QUEEN",
            13 => "KING",
            14 => "ACE",
            _ => self.symbol(),
        }
    }

    /// Exact symbol match only: no signs, no leading zeros.
    fn from_symbol(s: &str) -> Option<Rank> {
        Rank::all().find(|rank| rank.symbol() == s)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card. On the wire it is `{"code": "10C", "value": "10", "suit": "CLUBS"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CardJson", try_from = "CardJson")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Rank symbol followed by suit letter, e.g. `"10C"` or `"AH"`.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        let mut chars = code.chars();
        let suit_letter = chars.next_back().ok_or(CardParseError::Empty)?;
        let rank_part = chars.as_str();

        let suit = Suit::from_letter(suit_letter.to_ascii_uppercase())
            .ok_or_else(|| CardParseError::UnknownSuit(code.to_owned()))?;
        let rank = Rank::from_symbol(&rank_part.to_ascii_uppercase())
            .ok_or_else(|| CardParseError::UnknownRank(code.to_owned()))?;

        Ok(Card { rank, suit })
    }
}

/// Wire representation of a [`Card`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CardJson {
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suit: Option<String>,
}

impl From<Card> for CardJson {
    fn from(card: Card) -> Self {
        CardJson {
            code: card.code(),
            value: Some(card.rank.name().to_owned()),
            suit: Some(card.suit.name().to_owned()),
        }
    }
}

impl TryFrom<CardJson> for Card {
    type Error = CardParseError;

    fn try_from(json: CardJson) -> Result<Self, Self::Error> {
        json.code.parse()
    }
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// One deck's identity and its still-undrawn cards, top of the deck first.
///
/// `remaining` always equals `cards.len()` outside of a registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub deck_id: Uuid,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}
