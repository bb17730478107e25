//! Deals a few hands from a freshly built deck.
//!
//! Usage: `cargo run --example deal -- [players] [cards-per-hand] [jokers]`

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::Card;
use deckrs::deck::Builder;
use deckrs::options::{default_sort, jokers, shuffle_with_seed};

fn arg_or(index: usize, default: usize) -> usize {
    env::args()
        .nth(index)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let players = arg_or(1, 4);
    let per_hand = arg_or(2, 5);
    let joker_count = u8::try_from(arg_or(3, 2)).unwrap_or(u8::MAX);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut cards = Builder::new()
        .with(jokers(joker_count))
        .with(shuffle_with_seed(seed))
        .build();
    println!("Deck of {} cards (seed {seed})", cards.len());

    for player in 1..=players {
        if cards.len() < per_hand {
            println!("Not enough cards left for player {player}.");
            break;
        }
        let hand: Vec<Card> = default_sort(cards.split_off(cards.len() - per_hand));
        let labels: Vec<String> = hand.iter().map(ToString::to_string).collect();
        println!("Player {player}: {}", labels.join(", "));
    }

    println!("{} cards left in the deck.", cards.len());
}
