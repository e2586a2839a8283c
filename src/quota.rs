//! Daily game quota tracking.

use alloc::format;
use alloc::string::{String, ToString};

use crate::options::{DAILY_QUOTA, GameOptions};
use crate::store::KeyValueStore;

/// Tracks how many games have been started per day.
///
/// Counts live in a [`KeyValueStore`] under one key per date, so counts
/// from earlier days are simply never read again and need no cleanup.
/// Dates are caller-supplied opaque strings; any labelling that is stable
/// for a day works.
///
/// # Example
///
/// ```
/// use acesup::{DailyQuota, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let quota = DailyQuota::new(2);
/// quota.record_game(&mut store, "2024-06-01");
/// quota.record_game(&mut store, "2024-06-01");
/// assert!(!quota.has_quota_left(&store, "2024-06-01"));
/// assert!(quota.has_quota_left(&store, "2024-06-02"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyQuota {
    limit: u32,
    unlimited: bool,
}

impl Default for DailyQuota {
    fn default() -> Self {
        Self::new(DAILY_QUOTA)
    }
}

impl DailyQuota {
    /// Creates a quota allowing `limit` games per day.
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self {
            limit,
            unlimited: false,
        }
    }

    /// Creates a quota that never runs out and never writes to the store.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            limit: 0,
            unlimited: true,
        }
    }

    /// Creates the quota described by `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self {
            limit: options.daily_quota,
            unlimited: options.unlimited_play,
        }
    }

    fn key(date: &str) -> String {
        format!("gamesPlayed_{date}")
    }

    /// Returns how many games were recorded for `date`. Always zero in
    /// unlimited mode.
    #[must_use]
    pub fn games_played(&self, store: &impl KeyValueStore, date: &str) -> u32 {
        if self.unlimited {
            return 0;
        }
        store
            .get(&Self::key(date))
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Records one more game for `date`. A no-op in unlimited mode.
    pub fn record_game(&self, store: &mut impl KeyValueStore, date: &str) {
        if self.unlimited {
            return;
        }
        let played = self.games_played(store, date).saturating_add(1);
        store.set(&Self::key(date), &played.to_string());
    }

    /// Returns whether another game may be started on `date`.
    #[must_use]
    pub fn has_quota_left(&self, store: &impl KeyValueStore, date: &str) -> bool {
        self.unlimited || self.games_played(store, date) < self.limit
    }

    /// Returns how many games remain for `date`, or `None` in unlimited
    /// mode.
    #[must_use]
    pub fn remaining(&self, store: &impl KeyValueStore, date: &str) -> Option<u32> {
        if self.unlimited {
            return None;
        }
        Some(self.limit.saturating_sub(self.games_played(store, date)))
    }
}
