//! Game status: derived win, loss, and progress detection.

use crate::card::Rank;
use crate::pile::Pile;

use super::Game;

/// Game status, derived from the board on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Cards can still be dealt, discarded, or moved.
    InProgress,
    /// The deck is spent, nothing can change, and only four cards remain.
    Won,
    /// The deck is spent, nothing can change, and more than four cards
    /// remain.
    Lost,
}

impl GameStatus {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl Game {
    /// Returns the current game status.
    ///
    /// The status is recomputed from the board rather than cached: the game
    /// is over exactly when the deck is empty and neither a discard nor a
    /// useful move is available. A move only counts as useful when an empty
    /// pile exists and some pile holds at least two cards; shuffling a lone
    /// card between piles changes nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::{Game, GameOptions, GameStatus};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.deck.is_empty() {
            return GameStatus::InProgress;
        }

        if self.any_discard_available() || self.any_move_available() {
            return GameStatus::InProgress;
        }

        let won = self.score() == super::PILE_COUNT
            && (!self.options.strict_win || self.is_perfect_position());
        if won { GameStatus::Won } else { GameStatus::Lost }
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Returns the score: the total number of cards left on the piles.
    /// Lower is better; four is a win.
    #[must_use]
    pub fn score(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Returns whether all four piles each hold exactly one card and that
    /// card is an ace.
    ///
    /// A cosmetic predicate: shells use it to ask for confirmation before
    /// throwing such a board away on restart. It plays no part in win
    /// detection under the default rules.
    #[must_use]
    pub fn is_perfect_position(&self) -> bool {
        self.piles
            .iter()
            .all(|pile| pile.len() == 1 && pile.top().is_some_and(|card| card.rank == Rank::Ace))
    }

    /// Returns whether any pile's top card can be discarded right now.
    #[must_use]
    pub fn any_discard_available(&self) -> bool {
        (0..super::PILE_COUNT).any(|pile| self.can_discard(pile))
    }

    /// A useful move needs an empty target and a source that leaves a card
    /// behind.
    pub(super) fn any_move_available(&self) -> bool {
        self.has_empty_pile() && self.piles.iter().any(|pile| pile.len() >= 2)
    }
}
