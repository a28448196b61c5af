//! Game configuration options.

use crate::policy::DEALER_STANDS_ON;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::GameOptions;
///
/// let options = GameOptions::default().with_dealer_stands_on(18);
/// assert_eq!(options.dealer_stands_on, 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: DEALER_STANDS_ON,
        }
    }
}

impl GameOptions {
    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}
