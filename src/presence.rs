//! Anonymous daily player counting.
//!
//! The game likes to tell players how many people played today. The
//! aggregation service lives behind [`PlayerCounter`] so the engine never
//! talks to a network itself, and a failing service degrades to
//! [`DailyPlayers::Unknown`] instead of an error the shell has to handle.
//!
//! Each device registers at most once per day: a marker key in the
//! [`KeyValueStore`] remembers the check-in, and the marker is only
//! written once the service has accepted the visit, so a failed attempt
//! is retried on the next check-in.

use alloc::format;
use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use rand::Rng;

use crate::error::CounterError;
use crate::store::KeyValueStore;

const PLAYER_ID_KEY: &str = "playerId";

/// Backend that aggregates visits into daily player counts.
///
/// Implementations backed by a network service should map any transport
/// or backend failure to [`CounterError::Unavailable`].
pub trait PlayerCounter {
    /// Records a visit by `player` on `date` and returns the updated
    /// count of players seen that day.
    ///
    /// # Errors
    ///
    /// [`CounterError::Unavailable`] when the backend cannot be reached.
    fn record_visit(&mut self, date: &str, player: &str) -> Result<u64, CounterError>;

    /// Returns how many players have been seen on `date`.
    ///
    /// # Errors
    ///
    /// [`CounterError::Unavailable`] when the backend cannot be reached.
    fn daily_count(&self, date: &str) -> Result<u64, CounterError>;
}

/// Today's player count, ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyPlayers {
    /// This device is the only player seen today.
    First,
    /// The number of players seen today.
    Count(u64),
    /// The counting service could not be reached.
    Unknown,
}

/// Returns this device's player id, creating and persisting one on first
/// use.
///
/// The id is an opaque 32 hex digit string stored under a fixed key;
/// whatever is already stored is trusted as-is.
pub fn player_id<R: Rng + ?Sized>(store: &mut impl KeyValueStore, rng: &mut R) -> String {
    if let Some(id) = store.get(PLAYER_ID_KEY) {
        return id;
    }
    let id = format!("{:032x}", rng.random::<u128>());
    store.set(PLAYER_ID_KEY, &id);
    id
}

/// Runs the daily check-in flow and returns today's player count.
///
/// A device that has not yet checked in on `date` registers a visit and,
/// only once the service accepts it, writes the day's visited marker. A
/// device that already checked in just fetches the current count. Either
/// way a failing service yields [`DailyPlayers::Unknown`] and leaves the
/// marker untouched.
///
/// # Example
///
/// ```
/// use acesup::{DailyPlayers, MemoryCounter, MemoryStore, check_in};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut store = MemoryStore::new();
/// let mut counter = MemoryCounter::new();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let players = check_in(&mut store, &mut counter, &mut rng, "2024-06-01");
/// assert_eq!(players, DailyPlayers::First);
/// ```
pub fn check_in<R: Rng + ?Sized>(
    store: &mut impl KeyValueStore,
    counter: &mut impl PlayerCounter,
    rng: &mut R,
    date: &str,
) -> DailyPlayers {
    let marker = format!("visitedToday_{date}");
    if store.get(&marker).is_some() {
        return match counter.daily_count(date) {
            Ok(1) => DailyPlayers::First,
            Ok(count) => DailyPlayers::Count(count),
            Err(CounterError::Unavailable) => DailyPlayers::Unknown,
        };
    }

    let player = player_id(store, rng);
    match counter.record_visit(date, &player) {
        Ok(count) => {
            store.set(&marker, "true");
            if count == 1 {
                DailyPlayers::First
            } else {
                DailyPlayers::Count(count)
            }
        }
        Err(CounterError::Unavailable) => DailyPlayers::Unknown,
    }
}

/// Visit history the counter keeps per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitStats {
    /// Date of the first recorded visit.
    pub first_visit: String,
    /// Date of the most recent recorded visit.
    pub last_visit: String,
    /// Total number of recorded visits.
    pub visit_count: u64,
}

/// An in-process [`PlayerCounter`] for tests and offline shells.
#[derive(Debug, Clone, Default)]
pub struct MemoryCounter {
    days: HashMap<String, u64>,
    players: HashMap<String, VisitStats>,
}

impl MemoryCounter {
    /// Creates a counter with no recorded visits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visit history for `player`, if any.
    #[must_use]
    pub fn stats(&self, player: &str) -> Option<&VisitStats> {
        self.players.get(player)
    }
}

impl PlayerCounter for MemoryCounter {
    fn record_visit(&mut self, date: &str, player: &str) -> Result<u64, CounterError> {
        let count = self.days.entry(String::from(date)).or_insert(0);
        *count += 1;
        let count = *count;

        let stats = self
            .players
            .entry(String::from(player))
            .or_insert_with(|| VisitStats {
                first_visit: String::from(date),
                last_visit: String::from(date),
                visit_count: 0,
            });
        stats.last_visit = String::from(date);
        stats.visit_count += 1;

        Ok(count)
    }

    fn daily_count(&self, date: &str) -> Result<u64, CounterError> {
        Ok(self.days.get(date).copied().unwrap_or(0))
    }
}
