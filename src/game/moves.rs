//! Moving top cards onto empty piles and tracking the pending selection.

use crate::error::{MoveError, SelectError};

use super::{Game, PILE_COUNT};

impl Game {
    /// Returns whether the top card of `from` can be moved onto `to`.
    ///
    /// A move needs a non-empty source, an empty target, and two distinct
    /// piles. Only top cards move, and only onto empty piles.
    #[must_use]
    pub fn can_move(&self, from: usize, to: usize) -> bool {
        from < PILE_COUNT
            && to < PILE_COUNT
            && from != to
            && !self.piles[from].is_empty()
            && self.piles[to].is_empty()
    }

    /// Moves the top card of `from` onto the empty pile `to`.
    ///
    /// Any pending selection is cleared, whether or not it pointed at
    /// `from`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] when the game has already ended.
    /// - [`MoveError::NoSuchPile`] when either index is out of range.
    /// - [`MoveError::SamePile`] when `from` and `to` are the same pile.
    /// - [`MoveError::EmptySource`] when `from` holds no cards.
    /// - [`MoveError::OccupiedTarget`] when `to` already holds cards.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::{Card, Game, GameOptions, Rank, Suit};
    ///
    /// let piles = [
    ///     vec![
    ///         Card::new(Suit::Spades, Rank::Five),
    ///         Card::new(Suit::Spades, Rank::Nine),
    ///     ],
    ///     vec![],
    ///     vec![],
    ///     vec![],
    /// ];
    /// let mut game = Game::from_parts(GameOptions::default(), 0, vec![], piles);
    /// game.move_card(0, 1)?;
    /// // the nine now guards the five from another pile
    /// assert!(game.can_discard(0));
    /// # Ok::<(), acesup::MoveError>(())
    /// ```
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if from >= PILE_COUNT || to >= PILE_COUNT {
            return Err(MoveError::NoSuchPile);
        }
        if from == to {
            return Err(MoveError::SamePile);
        }
        if self.piles[from].is_empty() {
            return Err(MoveError::EmptySource);
        }
        if !self.piles[to].is_empty() {
            return Err(MoveError::OccupiedTarget);
        }

        let card = match self.piles[from].pop() {
            Some(card) => card,
            None => return Err(MoveError::EmptySource),
        };
        self.piles[to].push(card);
        self.selection = None;
        Ok(())
    }

    /// Marks the top card of `pile` as selected for a later move.
    ///
    /// Selecting does not require an empty pile to exist; the selection
    /// simply waits until one is clicked.
    ///
    /// # Errors
    ///
    /// - [`SelectError::GameOver`] when the game has already ended.
    /// - [`SelectError::NoSuchPile`] when `pile` is out of range.
    /// - [`SelectError::EmptyPile`] when `pile` holds no cards.
    pub fn select(&mut self, pile: usize) -> Result<(), SelectError> {
        if self.is_over() {
            return Err(SelectError::GameOver);
        }
        if pile >= PILE_COUNT {
            return Err(SelectError::NoSuchPile);
        }
        if self.piles[pile].is_empty() {
            return Err(SelectError::EmptyPile);
        }
        self.selection = Some(pile);
        Ok(())
    }

    /// Clears any pending selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }
}
