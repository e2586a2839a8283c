//! Pile representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// One of the four table piles.
///
/// Cards below the top are hidden but retained; only the top card takes part
/// in discard and move decisions, while the card directly beneath it feeds
/// the exposure shortcut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// Cards in the pile, bottom first.
    cards: Vec<Card>,
}

impl Pile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding the given cards, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the card directly beneath the top card, if any.
    #[must_use]
    pub fn under_top(&self) -> Option<Card> {
        self.cards.len().checked_sub(2).map(|i| self.cards[i])
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Puts a card on top of the pile.
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Takes the top card off the pile.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Empties the pile.
    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}
