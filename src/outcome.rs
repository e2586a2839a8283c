//! Outcome types reported back to the shell.

use crate::card::Card;

/// What a resolved click actually did.
///
/// The shell re-renders from the game state after every click; the outcome
/// tells it which kind of change to announce, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked pile's top card was discarded.
    Discarded(Card),
    /// The pending selection was moved onto the clicked empty pile.
    Moved {
        /// Pile the card came from.
        from: usize,
        /// Pile the card landed on.
        to: usize,
    },
    /// The clicked pile was picked up for a pending move.
    Selected(usize),
    /// The clicked pile was already selected and was put back down.
    Deselected(usize),
    /// The click matched no rule and changed nothing.
    Ignored,
}
