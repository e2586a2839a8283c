//! An Aces Up solitaire game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full table state,
//! including dealing, discards, moves onto empty piles, the exposure
//! shortcut, and derived win or loss detection. Around the engine sit the
//! small pieces a shell needs: persisted settings, a daily game quota,
//! anonymous daily player counting, and a click classifier.
//!
//! # Example
//!
//! ```no_run
//! use acesup::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42);
//! let _ = game.deal();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod gesture;
pub mod options;
pub mod outcome;
pub mod pile;
pub mod presence;
pub mod quota;
pub mod restart;
pub mod settings;
pub mod store;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ClickError, CounterError, DealError, DiscardError, ExposureError, MoveError, SelectError,
};
pub use game::{Game, GameStatus, PILE_COUNT};
pub use gesture::{ClickClassifier, GestureIntent};
pub use options::{DAILY_QUOTA, DOUBLE_CLICK_WINDOW_MS, GameOptions};
pub use outcome::ClickOutcome;
pub use pile::Pile;
pub use presence::{DailyPlayers, MemoryCounter, PlayerCounter, VisitStats, check_in, player_id};
pub use quota::DailyQuota;
pub use restart::{RestartOutcome, RestartPrompt, restart_game};
pub use settings::{HintMode, Settings};
pub use store::{KeyValueStore, MemoryStore};
pub use view::{Guidance, HintView, deck_stack, guidance, hints};
