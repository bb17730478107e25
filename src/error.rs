//! Error types for card parsing and conversion.

use thiserror::Error;

/// A rank value outside `1..=13` was given where a standard rank is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rank {0} is outside 1..=13")]
pub struct InvalidRank(pub u8);

/// Errors that can occur when parsing a card from its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The suit label is not one of the known suits.
    #[error("unknown suit label")]
    UnknownSuit,
    /// The rank label is not one of Ace through King.
    #[error("unknown rank label")]
    UnknownRank,
    /// The label is not of the form `<Rank> of <Suit>s` or `Joker`.
    #[error("expected `<Rank> of <Suit>s` or `Joker`")]
    Malformed,
}
