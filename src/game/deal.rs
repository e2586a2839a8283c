//! Dealing a round of cards from the deck onto the piles.

use crate::error::DealError;

use super::Game;

impl Game {
    /// Deals one card face up onto each pile, left to right.
    ///
    /// When fewer than four cards remain, the final short round covers the
    /// leftmost piles only. Any pending selection is cleared.
    ///
    /// Returns the number of cards dealt.
    ///
    /// # Errors
    ///
    /// - [`DealError::GameOver`] when the game has already ended.
    /// - [`DealError::EmptyDeck`] when no cards remain in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// assert_eq!(game.deal(), Ok(4));
    /// assert_eq!(game.deck_remaining(), 48);
    /// ```
    pub fn deal(&mut self) -> Result<usize, DealError> {
        if self.is_over() {
            return Err(DealError::GameOver);
        }
        if self.deck.is_empty() {
            return Err(DealError::EmptyDeck);
        }

        let mut dealt = 0;
        for pile in &mut self.piles {
            if let Some(card) = self.deck.pop() {
                pile.push(card);
                dealt += 1;
            }
        }
        self.selection = None;
        Ok(dealt)
    }
}
