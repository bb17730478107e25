//! Deck construction.
//!
//! A deck is a plain `Vec<Card>`. [`new`] starts from the standard 52 cards
//! and runs them through a list of [`Transform`]s, in order; [`Builder`] does
//! the same with an owned, chainable list.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A step in deck construction: takes the current cards, returns the next.
///
/// Implemented for every `Fn(Vec<Card>) -> Vec<Card>`, so plain functions
/// such as [`default_sort`](crate::options::default_sort) and the closures
/// returned by the factories in [`options`](crate::options) can be used
/// directly.
pub trait Transform {
    /// Applies the transformation.
    fn apply(&self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: Fn(Vec<Card>) -> Vec<Card>,
{
    fn apply(&self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Returns the 52 standard cards, Spade Ace through Heart King.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Builds a deck from the standard 52 cards and the given transformations.
///
/// Each transformation receives the output of the previous one. Whatever
/// the last one returns is the deck, including empty or oversized results.
///
/// # Example
///
/// ```
/// use deckrs::{deck, options::{default_sort, jokers}};
///
/// let cards = deck::new(&[&jokers(2), &default_sort]);
/// assert_eq!(cards.len(), 54);
/// assert!(cards[52].is_joker());
/// ```
#[must_use]
pub fn new(opts: &[&dyn Transform]) -> Vec<Card> {
    let cards = opts
        .iter()
        .fold(standard(), |cards, opt| opt.apply(cards));
    debug!(transforms = opts.len(), len = cards.len(), "built deck");
    cards
}

/// An owned list of transformations, applied in the order they were added.
///
/// ```
/// use deckrs::deck::Builder;
/// use deckrs::options::{default_sort, jokers, shuffle_with_seed};
///
/// let builder = Builder::new()
///     .with(shuffle_with_seed(7))
///     .with(jokers(2))
///     .with(default_sort);
/// assert_eq!(builder.len(), 3);
///
/// let cards = builder.build();
/// assert_eq!(cards, deckrs::deck::new(&[&jokers(2), &default_sort]));
/// ```
#[derive(Default)]
pub struct Builder {
    transforms: Vec<Box<dyn Transform>>,
}

impl Builder {
    /// Creates a builder with no transformations.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Appends a transformation.
    #[must_use]
    pub fn with<T>(mut self, transform: T) -> Self
    where
        T: Transform + 'static,
    {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Returns the number of transformations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether no transformations have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds a fresh deck. The builder can be reused.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        let cards = self
            .transforms
            .iter()
            .fold(standard(), |cards, transform| transform.apply(cards));
        debug!(
            transforms = self.transforms.len(),
            len = cards.len(),
            "built deck"
        );
        cards
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}
