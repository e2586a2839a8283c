//! Click timing classification.

use crate::options::{DOUBLE_CLICK_WINDOW_MS, GameOptions};

/// What a click turned out to mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    /// A lone click on a pile.
    SingleClick(usize),
    /// A second click on the same pile within the double click window.
    DoubleClick(usize),
}

/// Classifies raw clicks into single and double clicks by timing alone.
///
/// Shells without a native double click event feed every click through
/// [`observe`]. Classification is purely temporal: the classifier looks
/// only at pile indices and timestamps, and every click resolves
/// immediately, so a single click is never delayed waiting for a possible
/// second one. Whether a double click can actually do anything is not its
/// business; [`Game::double_click`] falls back to single click behavior
/// on its own.
///
/// Timestamps are caller-supplied milliseconds from any monotonic clock.
///
/// # Example
///
/// ```
/// use acesup::{ClickClassifier, GestureIntent};
///
/// let mut clicks = ClickClassifier::default();
/// assert_eq!(clicks.observe(2, 1_000), GestureIntent::SingleClick(2));
/// assert_eq!(clicks.observe(2, 1_150), GestureIntent::DoubleClick(2));
/// // the pair is consumed, so a third rapid click starts over
/// assert_eq!(clicks.observe(2, 1_200), GestureIntent::SingleClick(2));
/// ```
///
/// [`observe`]: ClickClassifier::observe
/// [`Game::double_click`]: crate::Game::double_click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickClassifier {
    window_ms: u64,
    last: Option<(usize, u64)>,
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW_MS)
    }
}

impl ClickClassifier {
    /// Creates a classifier with the given double click window.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Creates the classifier described by `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self::new(options.double_click_window_ms)
    }

    /// The double click window in milliseconds.
    #[must_use]
    pub const fn window_ms(&self) -> u64 {
        self.window_ms
    }

    /// Classifies a click on `pile` at `now_ms`.
    ///
    /// A click pairs into a double click when the previous click hit the
    /// same pile strictly less than the window ago. Pairing consumes the
    /// previous click, so three rapid clicks are a double then a single,
    /// never two doubles.
    pub fn observe(&mut self, pile: usize, now_ms: u64) -> GestureIntent {
        match self.last {
            Some((last_pile, at))
                if last_pile == pile && now_ms.saturating_sub(at) < self.window_ms =>
            {
                self.last = None;
                GestureIntent::DoubleClick(pile)
            }
            _ => {
                self.last = Some((pile, now_ms));
                GestureIntent::SingleClick(pile)
            }
        }
    }

    /// Forgets the pending click, so the next click cannot pair with one
    /// from before a deal or restart.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
