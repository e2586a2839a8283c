//! Game configuration options.

/// Default number of games allowed per day.
pub const DAILY_QUOTA: u32 = 10;

/// Default double-click window in milliseconds.
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

/// Configuration options for an Aces Up game and its shell.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use acesup::GameOptions;
///
/// let options = GameOptions::default()
///     .with_strict_win(true)
///     .with_daily_quota(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether winning requires the four remaining cards to be the aces,
    /// rather than any four cards. The looser rule is the canonical one.
    pub strict_win: bool,
    /// Number of games allowed per day.
    pub daily_quota: u32,
    /// Whether the daily quota is bypassed entirely.
    pub unlimited_play: bool,
    /// Window within which a second click on the same pile counts as a
    /// double click, in milliseconds.
    pub double_click_window_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            strict_win: false,
            daily_quota: DAILY_QUOTA,
            unlimited_play: false,
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
        }
    }
}

impl GameOptions {
    /// Sets whether winning requires the four aces specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::GameOptions;
    ///
    /// let options = GameOptions::default().with_strict_win(true);
    /// assert!(options.strict_win);
    /// ```
    #[must_use]
    pub const fn with_strict_win(mut self, strict: bool) -> Self {
        self.strict_win = strict;
        self
    }

    /// Sets the number of games allowed per day.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::GameOptions;
    ///
    /// let options = GameOptions::default().with_daily_quota(3);
    /// assert_eq!(options.daily_quota, 3);
    /// ```
    #[must_use]
    pub const fn with_daily_quota(mut self, quota: u32) -> Self {
        self.daily_quota = quota;
        self
    }

    /// Sets whether the daily quota is bypassed.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::GameOptions;
    ///
    /// let options = GameOptions::default().with_unlimited_play(true);
    /// assert!(options.unlimited_play);
    /// ```
    #[must_use]
    pub const fn with_unlimited_play(mut self, unlimited: bool) -> Self {
        self.unlimited_play = unlimited;
        self
    }

    /// Sets the double-click window in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use acesup::GameOptions;
    ///
    /// let options = GameOptions::default().with_double_click_window(450);
    /// assert_eq!(options.double_click_window_ms, 450);
    /// ```
    #[must_use]
    pub const fn with_double_click_window(mut self, window_ms: u64) -> Self {
        self.double_click_window_ms = window_ms;
        self
    }
}
