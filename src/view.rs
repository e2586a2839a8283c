//! Render-side projections of game state.
//!
//! Pure functions a shell calls after every action to refresh its status
//! line, hints, and deck drawing. Nothing here mutates the game or does
//! I/O, so shells can call these as often as they like.

use crate::game::{Game, PILE_COUNT};
use crate::settings::HintMode;

/// What the player should be told to do next.
///
/// Variants are ordered by precedence: a discard beats placing a
/// selection, which beats starting one, which beats dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// A discard is available somewhere on the table.
    DiscardAvailable,
    /// A card is selected and an empty pile is open to receive it.
    PlaceSelection,
    /// An empty pile is open; a top card can be selected to move.
    SelectForMove,
    /// Nothing else to do; deal the next round.
    DealNext,
}

/// Returns the highest-precedence guidance for the current position, or
/// `None` once the game is over.
///
/// A pending selection is only worth mentioning while an empty pile is
/// open to receive it, and an open pile only prompts selecting while some
/// card is showing; a bare table is told to deal instead.
///
/// # Example
///
/// ```
/// use acesup::{Game, GameOptions, Guidance, guidance};
///
/// let game = Game::new(GameOptions::default(), 9);
/// assert_eq!(guidance(&game), Some(Guidance::DealNext));
/// ```
#[must_use]
pub fn guidance(game: &Game) -> Option<Guidance> {
    if game.is_over() {
        return None;
    }
    if game.any_discard_available() {
        return Some(Guidance::DiscardAvailable);
    }
    if game.selection().is_some() && game.has_empty_pile() {
        return Some(Guidance::PlaceSelection);
    }
    if game.has_empty_pile() && game.piles().iter().any(|pile| !pile.is_empty()) {
        return Some(Guidance::SelectForMove);
    }
    Some(Guidance::DealNext)
}

/// Hint output for one render pass, shaped by the player's
/// [`HintMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintView {
    /// Draw no hints.
    Off,
    /// Signal only whether some discard exists.
    Exists {
        /// Whether any pile's top card is discardable.
        available: bool,
    },
    /// Highlight each discardable top card.
    Show {
        /// Per-pile discardability flags.
        piles: [bool; PILE_COUNT],
    },
}

/// Projects the current discard opportunities through `mode`.
#[must_use]
pub fn hints(game: &Game, mode: HintMode) -> HintView {
    match mode {
        HintMode::Off => HintView::Off,
        HintMode::Exists => HintView::Exists {
            available: game.any_discard_available(),
        },
        HintMode::Show => HintView::Show {
            piles: game.discardable_piles(),
        },
    }
}

/// Returns how many card backs to draw for the deck, capped at five.
#[must_use]
pub fn deck_stack(game: &Game) -> usize {
    game.deck_remaining().min(5)
}
