//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The deck has no cards left.
    #[error("the deck has no cards left")]
    EmptyDeck,
}

/// Errors that can occur when discarding a pile's top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The pile index is out of range.
    #[error("no such pile")]
    NoSuchPile,
    /// The pile has no cards.
    #[error("the pile is empty")]
    EmptyPile,
    /// No other pile shows a higher card of the same suit.
    #[error("no higher card of the same suit is showing")]
    NoHigherCard,
}

/// Errors that can occur when moving a top card onto an empty pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// A pile index is out of range.
    #[error("no such pile")]
    NoSuchPile,
    /// Source and target are the same pile.
    #[error("source and target are the same pile")]
    SamePile,
    /// The source pile has no cards.
    #[error("the source pile is empty")]
    EmptySource,
    /// The target pile already holds a card.
    #[error("the target pile is not empty")]
    OccupiedTarget,
}

/// Errors that can occur when discarding via the exposure shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExposureError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The pile index is out of range.
    #[error("no such pile")]
    NoSuchPile,
    /// The shortcut stands in for a move, so an empty pile must exist.
    #[error("no empty pile is available")]
    NoEmptyPile,
    /// The pile holds fewer than two cards.
    #[error("the pile holds fewer than two cards")]
    TooFewCards,
    /// The card beneath the top is not a higher card of the same suit.
    #[error("the card beneath is not a higher card of the same suit")]
    NotDominated,
}

/// Errors that can occur when selecting a pile for a pending move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The pile index is out of range.
    #[error("no such pile")]
    NoSuchPile,
    /// An empty pile cannot be picked up.
    #[error("the pile is empty")]
    EmptyPile,
}

/// Errors that can occur when resolving a click intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClickError {
    /// The game is over.
    #[error("the game is over")]
    GameOver,
    /// The pile index is out of range.
    #[error("no such pile")]
    NoSuchPile,
}

/// Errors reported by a player-counting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CounterError {
    /// The counting service could not be reached.
    #[error("the counting service is unavailable")]
    Unavailable,
}
