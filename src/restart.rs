//! The shell-side restart flow.
//!
//! Starting over is more than [`Game::restart`]: the daily quota has to
//! agree, and a board showing four lone aces deserves a confirmation
//! before it is thrown away. [`restart_game`] runs those checks in order
//! and reports what happened, so shells only supply the prompt wording.

use crate::game::Game;
use crate::quota::DailyQuota;
use crate::store::KeyValueStore;

/// Which confirmation to put to the player before restarting away a
/// board of four lone aces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPrompt {
    /// The deck is spent, so the board is a won game.
    GameWon,
    /// The deck still has cards; the four aces are up early.
    AcesShowing,
}

/// What a restart request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// The daily quota is used up. Nothing changed.
    QuotaExhausted,
    /// The board is four lone aces and the request was not confirmed.
    /// Nothing changed.
    NeedsConfirmation(RestartPrompt),
    /// The game was recorded against the quota and restarted.
    Restarted {
        /// Games left for `date` after recording this one, or `None` in
        /// unlimited mode.
        remaining: Option<u32>,
    },
}

/// Runs the restart flow: the quota gate, then the perfect position
/// confirmation, then record and restart.
///
/// A request on a board of four lone aces comes back as
/// [`RestartOutcome::NeedsConfirmation`] until the caller passes it again
/// with `confirmed` set; any other board restarts right away. A refusal
/// at either gate leaves the game and the quota untouched, so a declined
/// confirmation burns nothing.
///
/// # Example
///
/// ```
/// use acesup::{DailyQuota, Game, GameOptions, MemoryStore, RestartOutcome, restart_game};
///
/// let mut game = Game::new(GameOptions::default(), 3);
/// let mut store = MemoryStore::new();
/// let quota = DailyQuota::new(2);
///
/// let outcome = restart_game(&mut game, &quota, &mut store, "2024-06-01", false);
/// assert_eq!(outcome, RestartOutcome::Restarted { remaining: Some(1) });
/// ```
pub fn restart_game(
    game: &mut Game,
    quota: &DailyQuota,
    store: &mut impl KeyValueStore,
    date: &str,
    confirmed: bool,
) -> RestartOutcome {
    if !quota.has_quota_left(store, date) {
        return RestartOutcome::QuotaExhausted;
    }

    if game.is_perfect_position() && !confirmed {
        let prompt = if game.deck_remaining() == 0 {
            RestartPrompt::GameWon
        } else {
            RestartPrompt::AcesShowing
        };
        return RestartOutcome::NeedsConfirmation(prompt);
    }

    quota.record_game(store, date);
    game.restart();
    RestartOutcome::Restarted {
        remaining: quota.remaining(store, date),
    }
}
