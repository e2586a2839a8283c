//! Discarding top cards, directly or by exposing a higher card underneath.

use crate::card::Card;
use crate::error::{DiscardError, ExposureError};

use super::{Game, PILE_COUNT};

impl Game {
    /// Returns whether the top card of `pile` can be discarded.
    ///
    /// A top card can be discarded when another pile's top card has the
    /// same suit and a strictly higher value. Aces are high, so an ace is
    /// never discardable.
    #[must_use]
    pub fn can_discard(&self, pile: usize) -> bool {
        let Some(top) = self.top_card(pile) else {
            return false;
        };
        self.piles.iter().enumerate().any(|(other, candidate)| {
            other != pile
                && candidate
                    .top()
                    .is_some_and(|card| card.suit == top.suit && card.value() > top.value())
        })
    }

    /// Discards the top card of `pile`.
    ///
    /// The card is removed from play and any pending selection is cleared.
    /// Returns the discarded card.
    ///
    /// # Errors
    ///
    /// - [`DiscardError::GameOver`] when the game has already ended.
    /// - [`DiscardError::NoSuchPile`] when `pile` is out of range.
    /// - [`DiscardError::EmptyPile`] when `pile` holds no cards.
    /// - [`DiscardError::NoHigherCard`] when no other pile shows a higher
    ///   card of the same suit.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::{Card, Game, GameOptions, Rank, Suit};
    ///
    /// let piles = [
    ///     vec![Card::new(Suit::Spades, Rank::Five)],
    ///     vec![Card::new(Suit::Spades, Rank::Nine)],
    ///     vec![],
    ///     vec![],
    /// ];
    /// let mut game = Game::from_parts(GameOptions::default(), 0, vec![], piles);
    /// assert_eq!(game.discard(0), Ok(Card::new(Suit::Spades, Rank::Five)));
    /// assert!(game.piles()[0].is_empty());
    /// ```
    pub fn discard(&mut self, pile: usize) -> Result<Card, DiscardError> {
        if self.is_over() {
            return Err(DiscardError::GameOver);
        }
        if pile >= PILE_COUNT {
            return Err(DiscardError::NoSuchPile);
        }
        if self.piles[pile].is_empty() {
            return Err(DiscardError::EmptyPile);
        }
        if !self.can_discard(pile) {
            return Err(DiscardError::NoHigherCard);
        }

        // can_discard guarantees the pile has a top card.
        let card = match self.piles[pile].pop() {
            Some(card) => card,
            None => return Err(DiscardError::EmptyPile),
        };
        self.discarded.push(card);
        self.selection = None;
        Ok(card)
    }

    /// Returns whether the top card of `pile` sits directly on a higher
    /// card of the same suit.
    ///
    /// This is the exposure relation only; [`discard_via_exposure`] further
    /// requires an empty pile so the shortcut stays equivalent to moving
    /// the top card away and then discarding it.
    ///
    /// [`discard_via_exposure`]: Game::discard_via_exposure
    #[must_use]
    pub fn can_discard_via_exposure(&self, pile: usize) -> bool {
        let Some(pile) = self.piles.get(pile) else {
            return false;
        };
        match (pile.top(), pile.under_top()) {
            (Some(top), Some(under)) => top.suit == under.suit && top.value() < under.value(),
            _ => false,
        }
    }

    /// Discards the top card of `pile` because the card directly beneath
    /// it is a higher card of the same suit.
    ///
    /// Shorthand for moving the top card to an empty pile and discarding
    /// it there, so an empty pile must exist even though no card actually
    /// lands on it. The card is removed from play and any pending
    /// selection is cleared. Returns the discarded card.
    ///
    /// # Errors
    ///
    /// - [`ExposureError::GameOver`] when the game has already ended.
    /// - [`ExposureError::NoSuchPile`] when `pile` is out of range.
    /// - [`ExposureError::NoEmptyPile`] when no pile is empty.
    /// - [`ExposureError::TooFewCards`] when `pile` holds fewer than two
    ///   cards.
    /// - [`ExposureError::NotDominated`] when the card beneath the top is
    ///   not a higher card of the same suit.
    pub fn discard_via_exposure(&mut self, pile: usize) -> Result<Card, ExposureError> {
        if self.is_over() {
            return Err(ExposureError::GameOver);
        }
        if pile >= PILE_COUNT {
            return Err(ExposureError::NoSuchPile);
        }
        if !self.has_empty_pile() {
            return Err(ExposureError::NoEmptyPile);
        }
        if self.piles[pile].len() < 2 {
            return Err(ExposureError::TooFewCards);
        }
        if !self.can_discard_via_exposure(pile) {
            return Err(ExposureError::NotDominated);
        }

        let card = match self.piles[pile].pop() {
            Some(card) => card,
            None => return Err(ExposureError::TooFewCards),
        };
        self.discarded.push(card);
        self.selection = None;
        Ok(card)
    }

    /// Returns the piles whose top cards are currently discardable.
    #[must_use]
    pub fn discardable_piles(&self) -> [bool; PILE_COUNT] {
        let mut out = [false; PILE_COUNT];
        for (pile, flag) in out.iter_mut().enumerate() {
            *flag = self.can_discard(pile);
        }
        out
    }

    /// Returns how many cards have been discarded so far.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discarded.len()
    }
}
