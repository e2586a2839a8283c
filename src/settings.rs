//! Persisted player settings.

use crate::store::KeyValueStore;

/// How much help the table gives about available discards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HintMode {
    /// No hints at all.
    Off,
    /// Signal that some discard exists, without saying where.
    Exists,
    /// Mark every discardable card.
    #[default]
    Show,
}

impl HintMode {
    /// The storage spelling of this mode.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Exists => "exists",
            Self::Show => "show",
        }
    }

    /// Parses a stored spelling. Unrecognized input falls back to the
    /// default rather than failing, so a corrupted store never locks a
    /// player out of hints.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "off" => Self::Off,
            "exists" => Self::Exists,
            _ => Self::Show,
        }
    }

    /// Returns the next mode in the off, exists, show cycle.
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::Off => Self::Exists,
            Self::Exists => Self::Show,
            Self::Show => Self::Off,
        }
    }
}

/// Player-facing settings, persisted through a [`KeyValueStore`].
///
/// # Example
///
/// ```
/// use acesup::{HintMode, MemoryStore, Settings};
///
/// let mut store = MemoryStore::new();
/// let settings = Settings {
///     hint_mode: HintMode::Exists,
///     colorful_suits: true,
/// };
/// settings.save(&mut store);
/// assert_eq!(Settings::load(&store), settings);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// How discard hints are presented.
    pub hint_mode: HintMode,
    /// Whether each suit gets its own color instead of plain red and
    /// black.
    pub colorful_suits: bool,
}

impl Settings {
    const HINT_MODE_KEY: &'static str = "hintMode";
    const COLORFUL_SUITS_KEY: &'static str = "colorfulSuits";

    /// Loads settings from `store`. Missing or unrecognized values fall
    /// back to the defaults.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        let hint_mode = store
            .get(Self::HINT_MODE_KEY)
            .map_or_else(HintMode::default, |value| HintMode::from_key(&value));
        let colorful_suits = store
            .get(Self::COLORFUL_SUITS_KEY)
            .is_some_and(|value| value == "true");
        Self {
            hint_mode,
            colorful_suits,
        }
    }

    /// Saves both settings to `store`.
    pub fn save(self, store: &mut impl KeyValueStore) {
        store.set(Self::HINT_MODE_KEY, self.hint_mode.as_key());
        store.set(
            Self::COLORFUL_SUITS_KEY,
            if self.colorful_suits { "true" } else { "false" },
        );
    }
}
