//! Deck transformations.
//!
//! Every item here is either a transformation (`fn(Vec<Card>) -> Vec<Card>`)
//! or a factory returning one. Pass them to [`new`](crate::deck::new) or
//! [`Builder::with`](crate::deck::Builder::with) to shape the deck.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::card::Card;

/// Sorts the cards by [`Card::abs_rank`], jokers last.
///
/// Applying it twice gives the same order as applying it once.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, deck, options::default_sort};
///
/// let cards = deck::new(&[&default_sort]);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
/// assert_eq!(cards[51], Card::new(Suit::Heart, Rank::KING));
/// ```
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    trace!(len = cards.len(), "default sort");
    cards.sort_unstable_by_key(|card| sort_key(*card));
    cards
}

/// The King of Hearts and joker 0 share an absolute rank; the suit keeps
/// jokers last.
const fn sort_key(card: Card) -> (u16, u8) {
    (card.abs_rank(), card.suit as u8)
}

/// A less-than predicate over two positions of a card sequence.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Returns the positional less-than predicate used by [`default_sort`].
///
/// Meant to be handed to [`sort`], which calls it with the current cards.
///
/// ```
/// use deckrs::{deck, options::{default_sort, less, sort}};
///
/// let a = deck::new(&[&sort(less)]);
/// let b = deck::new(&[&default_sort]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i: usize, j: usize| sort_key(cards[i]) < sort_key(cards[j]))
}

/// Creates a transformation that sorts with a caller-defined ordering.
///
/// `less` receives the whole current sequence and returns a predicate over
/// two positions, so orderings may depend on the deck contents rather than
/// on card values alone. The sort is stable. A predicate that is not a strict
/// weak ordering leaves the cards in an unspecified order but never panics.
///
/// # Example
///
/// ```
/// use deckrs::{Suit, deck, options::sort};
///
/// // Hearts first, everything else keeps its order.
/// let hearts_first = sort(|cards| {
///     Box::new(move |i: usize, j: usize| {
///         cards[i].suit == Suit::Heart && cards[j].suit != Suit::Heart
///     })
/// });
/// let cards = deck::new(&[&hearts_first]);
/// assert!(cards[..13].iter().all(|card| card.suit == Suit::Heart));
/// ```
pub fn sort<F>(less: F) -> impl Fn(Vec<Card>) -> Vec<Card>
where
    F: for<'a> Fn(&'a [Card]) -> Less<'a>,
{
    move |cards: Vec<Card>| {
        trace!(len = cards.len(), "custom sort");
        let order = merge_sort_indices(cards.len(), &less(&cards));
        order.into_iter().map(|index| cards[index]).collect()
    }
}

/// Returns the positions `0..len` ordered by `less`.
///
/// Bottom-up merge sort. It only ever asks `less` questions and indexes
/// within bounds, so an inconsistent predicate cannot make it panic.
fn merge_sort_indices(len: usize, less: &impl Fn(usize, usize) -> bool) -> Vec<usize> {
    let mut src: Vec<usize> = (0..len).collect();
    let mut dst = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        dst.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            while left < mid && right < end {
                // Take from the right only when strictly less, keeping ties stable.
                if less(src[right], src[left]) {
                    dst.push(src[right]);
                    right += 1;
                } else {
                    dst.push(src[left]);
                    left += 1;
                }
            }
            dst.extend_from_slice(&src[left..mid]);
            dst.extend_from_slice(&src[right..end]);
        }
        core::mem::swap(&mut src, &mut dst);
        width *= 2;
    }

    src
}

/// Returns the cards in a uniformly random order.
///
/// Each call builds its own ChaCha8 generator seeded from operating system
/// entropy, so two calls in quick succession do not repeat a permutation.
/// Use [`shuffle_with_seed`] for a reproducible order.
///
/// # Panics
///
/// Panics if the operating system entropy source is unavailable.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle(cards: Vec<Card>) -> Vec<Card> {
    let mut rng = ChaCha8Rng::from_os_rng();
    permute(&cards, &mut rng)
}

/// Creates a transformation that shuffles with a fixed seed.
///
/// The same seed and input always give the same output. Seeding with the
/// current Unix time in whole seconds reproduces the behavior of a
/// time-seeded shuffle, including identical results within one second.
///
/// # Example
///
/// ```
/// use deckrs::{deck, options::shuffle_with_seed};
///
/// let a = deck::new(&[&shuffle_with_seed(42)]);
/// let b = deck::new(&[&shuffle_with_seed(42)]);
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with_seed(seed: u64) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        permute(&cards, &mut rng)
    }
}

/// Reads `cards` in the order of a random permutation of its positions.
fn permute(cards: &[Card], rng: &mut ChaCha8Rng) -> Vec<Card> {
    trace!(len = cards.len(), "shuffle");
    let mut perm: Vec<usize> = (0..cards.len()).collect();
    perm.shuffle(rng);
    perm.into_iter().map(|index| cards[index]).collect()
}

/// Creates a transformation that appends `n` jokers.
///
/// The jokers get ranks `0..n` in insertion order. Apply it before a sort to
/// have the sort place them; after, they stay at the very end.
///
/// # Example
///
/// ```
/// use deckrs::{Card, deck, options::jokers};
///
/// let cards = deck::new(&[&jokers(2)]);
/// assert_eq!(cards.len(), 54);
/// assert_eq!(cards[52..], [Card::joker(0), Card::joker(1)]);
/// ```
pub fn jokers(n: u8) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |mut cards: Vec<Card>| {
        trace!(count = n, "adding jokers");
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Creates a transformation that removes every card matching `pred`.
///
/// The remaining cards keep their order.
///
/// # Example
///
/// ```
/// use deckrs::{Rank, deck, options::filter};
///
/// let cards = deck::new(&[&filter(|card| card.rank == Rank::TWO || card.rank == Rank::THREE)]);
/// assert_eq!(cards.len(), 44);
/// ```
pub fn filter<P>(pred: P) -> impl Fn(Vec<Card>) -> Vec<Card>
where
    P: Fn(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        let before = cards.len();
        cards.retain(|card| !pred(card));
        trace!(removed = before - cards.len(), "filter");
        cards
    }
}

/// Creates a transformation that repeats the current cards `n` times.
///
/// `decks(0)` empties the sequence and `decks(1)` leaves it unchanged.
///
/// # Example
///
/// ```
/// use deckrs::{deck, options::decks};
///
/// assert_eq!(deck::new(&[&decks(6)]).len(), 6 * 52);
/// ```
pub fn decks(n: usize) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| {
        trace!(copies = n, "repeating deck");
        cards.repeat(n)
    }
}

#[cfg(test)]
mod tests {
    use super::merge_sort_indices;

    #[test]
    fn merge_sort_orders_and_keeps_ties_stable() {
        let keys = [3, 1, 2, 1, 0, 3];
        let order = merge_sort_indices(keys.len(), &|i, j| keys[i] < keys[j]);
        assert_eq!(order, vec![4, 1, 3, 2, 0, 5]);
    }

    #[test]
    fn merge_sort_handles_empty_and_single() {
        assert!(merge_sort_indices(0, &|_, _| true).is_empty());
        assert_eq!(merge_sort_indices(1, &|_, _| true), vec![0]);
    }

    #[test]
    fn merge_sort_survives_inconsistent_predicate() {
        let mut order = merge_sort_indices(53, &|_, _| true);
        order.sort_unstable();
        assert_eq!(order, (0..53).collect::<Vec<_>>());
    }
}
