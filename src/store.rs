//! Pluggable key-value persistence for shell state.
//!
//! Settings, quotas, and visit markers all persist through the
//! [`KeyValueStore`] trait so the engine never assumes a platform. A
//! browser shell backs it with local storage, a desktop shell with a
//! settings file, and tests with [`MemoryStore`].

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// String key-value storage.
///
/// Keys and values are plain strings, so any backend that can persist a
/// string map qualifies. Implementations decide durability; the crate
/// only reads back what it wrote.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// An in-memory store for tests and shells without persistence.
///
/// # Example
///
/// ```
/// use acesup::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("hintMode", "off");
/// assert_eq!(store.get("hintMode").as_deref(), Some("off"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns how many keys are stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(String::from(key), String::from(value));
    }
}
