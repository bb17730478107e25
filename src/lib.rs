//! A standard playing-card deck with optional `no_std` support.
//!
//! [`deck::new`] builds the 52 standard cards and passes them through a list
//! of transformations from [`options`]: sorting, shuffling, adding jokers,
//! filtering and repeating. A deck is a plain `Vec<Card>`.
//!
//! # Example
//!
//! ```
//! use deckrs::{Card, deck, options::{default_sort, jokers}};
//!
//! let cards = deck::new(&[&jokers(3), &default_sort]);
//! assert_eq!(cards.len(), 55);
//! assert_eq!(cards[0].to_string(), "Ace of Spades");
//! assert_eq!(cards[54], Card::joker(2));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{Builder, Transform};
pub use error::{InvalidRank, ParseCardError};
