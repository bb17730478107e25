//! Card types, display labels and parsing.

use core::fmt;
use core::str::FromStr;

use crate::error::{InvalidRank, ParseCardError};

/// Card suit.
///
/// The declaration order is the sort precedence used by
/// [`default_sort`](crate::options::default_sort): spades first, jokers last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Hearts.
    Heart,
    /// Joker marker. Not part of a standard deck.
    Joker,
}

const SUIT_LABELS: [&str; 5] = ["Spade", "Diamond", "Club", "Heart", "Joker"];

impl Suit {
    /// The four standard suits in deck order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the singular display label, e.g. `"Spade"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        SUIT_LABELS[self as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spade" => Ok(Self::Spade),
            "Diamond" => Ok(Self::Diamond),
            "Club" => Ok(Self::Club),
            "Heart" => Ok(Self::Heart),
            "Joker" => Ok(Self::Joker),
            _ => Err(ParseCardError::UnknownSuit),
        }
    }
}

/// Card rank.
///
/// Standard ranks run from [`Rank::ACE`] (1) to [`Rank::KING`] (13). Joker
/// cards reuse the rank as a zero-based index that only tells jokers apart,
/// which is why any `u8` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

const RANK_LABELS: [&str; 14] = [
    "", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

impl Rank {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Two (2).
    pub const TWO: Self = Self(2);
    /// Three (3).
    pub const THREE: Self = Self(3);
    /// Four (4).
    pub const FOUR: Self = Self(4);
    /// Five (5).
    pub const FIVE: Self = Self(5);
    /// Six (6).
    pub const SIX: Self = Self(6);
    /// Seven (7).
    pub const SEVEN: Self = Self(7);
    /// Eight (8).
    pub const EIGHT: Self = Self(8);
    /// Nine (9).
    pub const NINE: Self = Self(9);
    /// Ten (10).
    pub const TEN: Self = Self(10);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);

    /// The thirteen standard ranks, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Creates a rank from a raw value without validation.
    ///
    /// Use [`Rank::try_from`] when only standard ranks are acceptable.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this is one of Ace through King.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= Self::ACE.0 && self.0 <= Self::KING.0
    }

    /// Returns the display label, or `None` for non-standard values.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        if self.is_standard() {
            Some(RANK_LABELS[self.0 as usize])
        } else {
            None
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = InvalidRank;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let rank = Self(value);
        if rank.is_standard() {
            Ok(rank)
        } else {
            Err(InvalidRank(value))
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "Rank({})", self.0),
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANK_LABELS
            .iter()
            .skip(1)
            .position(|label| *label == s)
            .map(|index| Self(index as u8 + 1))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Equality, hashing and ordering are structural: suit first, then rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, or the joker index when `suit` is [`Suit::Joker`].
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates the joker with the given index.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self::new(Suit::Joker, Rank(index))
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the absolute rank: `suit * 13 + rank`.
    ///
    /// Lower values sort first. Spades occupy 1..=13, hearts 40..=52 and
    /// jokers start at 52.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spade, Rank::ACE).abs_rank(), 1);
    /// assert_eq!(Card::new(Suit::Diamond, Rank::TWO).abs_rank(), 15);
    /// ```
    #[must_use]
    pub const fn abs_rank(self) -> u16 {
        self.suit as u16 * Rank::KING.0 as u16 + self.rank.0 as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return fmt::Display::fmt(&self.suit, f);
        }

        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the label produced by [`Display`](fmt::Display).
    ///
    /// `"Joker"` parses to the joker with index 0, since the index is not
    /// part of the label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.label() {
            return Ok(Self::joker(0));
        }

        let (rank, suits) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let suit = suits
            .strip_suffix('s')
            .ok_or(ParseCardError::Malformed)?
            .parse::<Suit>()?;
        if suit == Suit::Joker {
            return Err(ParseCardError::Malformed);
        }

        Ok(Self::new(suit, rank.parse()?))
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();
