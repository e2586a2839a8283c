//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck;
use crate::options::GameOptions;
use crate::pile::Pile;

mod clicks;
mod deal;
mod discard;
mod moves;
pub mod status;

pub use status::GameStatus;

/// Number of table piles.
pub const PILE_COUNT: usize = 4;

/// An Aces Up game engine.
///
/// The engine owns the deck, the four piles, the pending selection, and the
/// discard pile, and it is the single handle through which the shell mutates
/// and observes a game. All operations are synchronous and either fully
/// apply or reject with an error; use [`GameOptions`] to configure rule and
/// shell behavior.
///
/// # Example
///
/// ```
/// use acesup::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// assert_eq!(game.deck_remaining(), 52);
///
/// let dealt = game.deal().unwrap();
/// assert_eq!(dealt, 4);
/// assert_eq!(game.deck_remaining(), 48);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards left to deal.
    deck: Vec<Card>,
    /// The four table piles.
    piles: [Pile; PILE_COUNT],
    /// Pile picked up for a pending move, if any.
    selection: Option<usize>,
    /// Cards removed from play.
    discarded: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck from the given seed.
    ///
    /// The same seed always produces the same deck order.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = deck::shuffled_deck(&mut rng);

        Self {
            options,
            deck,
            piles: [Pile::new(), Pile::new(), Pile::new(), Pile::new()],
            selection: None,
            discarded: Vec::new(),
            rng,
        }
    }

    /// Creates a game from a scripted position.
    ///
    /// Intended for tests and puzzle setups. The layout is taken as given:
    /// no check that the deck and piles together form a legal deal. The
    /// deck deals from its back, so the last card listed is dealt first.
    #[must_use]
    pub fn from_parts(
        options: GameOptions,
        seed: u64,
        deck: Vec<Card>,
        piles: [Vec<Card>; PILE_COUNT],
    ) -> Self {
        Self {
            options,
            deck,
            piles: piles.map(Pile::from_cards),
            selection: None,
            discarded: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a fresh game: rebuilds and reshuffles the deck from the
    /// engine's own random stream, and clears the piles, the selection, and
    /// the discard pile.
    ///
    /// Always succeeds, including from a finished game.
    pub fn restart(&mut self) {
        self.deck = deck::shuffled_deck(&mut self.rng);
        for pile in &mut self.piles {
            pile.clear();
        }
        self.selection = None;
        self.discarded.clear();
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the top card of the given pile, or `None` if the pile is
    /// empty or the index is out of range.
    #[must_use]
    pub fn top_card(&self, pile: usize) -> Option<Card> {
        self.piles.get(pile).and_then(Pile::top)
    }

    /// Returns the four piles.
    #[must_use]
    pub fn piles(&self) -> &[Pile; PILE_COUNT] {
        &self.piles
    }

    /// Returns whether at least one pile is empty.
    #[must_use]
    pub fn has_empty_pile(&self) -> bool {
        self.piles.iter().any(Pile::is_empty)
    }

    /// Returns the pile currently picked up for a pending move, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Returns the cards removed from play so far, oldest first.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the game options.
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }
}
