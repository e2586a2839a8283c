//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Builds the standard 52-card deck, one card per (suit, rank) pair.
///
/// # Example
///
/// ```
/// let deck = acesup::deck::standard_deck();
/// assert_eq!(deck.len(), acesup::DECK_SIZE);
/// ```
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Shuffles cards in place with a uniform Fisher-Yates permutation.
///
/// The randomness source is injected, so a seeded generator yields a
/// reproducible deck order.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Builds and shuffles a fresh deck in one step.
#[must_use]
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = standard_deck();
    shuffle(&mut cards, rng);
    cards
}
