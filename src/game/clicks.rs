//! Resolving pile clicks into game actions.
//!
//! Shells that only track pointer input can forward every click here and
//! let the engine decide what it meant. Shells with their own input
//! handling can call the underlying operations directly instead.

use crate::error::ClickError;
use crate::outcome::ClickOutcome;

use super::{Game, PILE_COUNT};

impl Game {
    /// Resolves a single click on `pile`.
    ///
    /// Clicks are tried against the rules in a fixed order:
    ///
    /// 1. An empty pile with a pending selection receives the selected
    ///    card.
    /// 2. A discardable top card is discarded.
    /// 3. While an empty pile exists, clicking a top card toggles its
    ///    selection.
    /// 4. Anything else is ignored.
    ///
    /// # Errors
    ///
    /// - [`ClickError::GameOver`] when the game has already ended.
    /// - [`ClickError::NoSuchPile`] when `pile` is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::{Card, ClickOutcome, Game, GameOptions, Rank, Suit};
    ///
    /// let piles = [
    ///     vec![Card::new(Suit::Spades, Rank::Five)],
    ///     vec![Card::new(Suit::Spades, Rank::Nine)],
    ///     vec![],
    ///     vec![],
    /// ];
    /// let mut game = Game::from_parts(GameOptions::default(), 0, vec![], piles);
    /// let outcome = game.single_click(0)?;
    /// assert_eq!(
    ///     outcome,
    ///     ClickOutcome::Discarded(Card::new(Suit::Spades, Rank::Five)),
    /// );
    /// # Ok::<(), acesup::ClickError>(())
    /// ```
    pub fn single_click(&mut self, pile: usize) -> Result<ClickOutcome, ClickError> {
        if self.is_over() {
            return Err(ClickError::GameOver);
        }
        if pile >= PILE_COUNT {
            return Err(ClickError::NoSuchPile);
        }

        if self.piles[pile].is_empty() {
            let Some(from) = self.selection else {
                return Ok(ClickOutcome::Ignored);
            };
            return match self.move_card(from, pile) {
                Ok(()) => Ok(ClickOutcome::Moved { from, to: pile }),
                Err(_) => {
                    self.selection = None;
                    Ok(ClickOutcome::Ignored)
                }
            };
        }

        if self.can_discard(pile) {
            return match self.discard(pile) {
                Ok(card) => Ok(ClickOutcome::Discarded(card)),
                Err(_) => Ok(ClickOutcome::Ignored),
            };
        }

        if self.has_empty_pile() {
            if self.selection == Some(pile) {
                self.selection = None;
                return Ok(ClickOutcome::Deselected(pile));
            }
            self.selection = Some(pile);
            return Ok(ClickOutcome::Selected(pile));
        }

        Ok(ClickOutcome::Ignored)
    }

    /// Resolves a double click on `pile`.
    ///
    /// A double click first tries [`discard_via_exposure`]; when that does
    /// not apply it falls back to plain [`single_click`] behavior, so a
    /// nervous double tap never does less than a single click would have.
    ///
    /// # Errors
    ///
    /// - [`ClickError::GameOver`] when the game has already ended.
    /// - [`ClickError::NoSuchPile`] when `pile` is out of range.
    ///
    /// [`discard_via_exposure`]: Game::discard_via_exposure
    /// [`single_click`]: Game::single_click
    pub fn double_click(&mut self, pile: usize) -> Result<ClickOutcome, ClickError> {
        if self.is_over() {
            return Err(ClickError::GameOver);
        }
        if pile >= PILE_COUNT {
            return Err(ClickError::NoSuchPile);
        }
        match self.discard_via_exposure(pile) {
            Ok(card) => Ok(ClickOutcome::Discarded(card)),
            Err(_) => self.single_click(pile),
        }
    }
}
