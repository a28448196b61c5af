use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealError;
use crate::policy::should_draw_with;
use crate::result::{GameResult, resolve};

use super::Game;

impl Game {
    /// Returns whether the dealer should draw another card.
    ///
    /// Uses the stopping total from [`GameOptions`](crate::GameOptions).
    #[must_use]
    pub fn dealer_should_draw(&self) -> bool {
        should_draw_with(self.dealer.cards(), self.options.dealer_stands_on)
    }

    /// Dealer plays out their hand.
    ///
    /// The dealer draws while [`Game::dealer_should_draw`] holds. Returns the
    /// cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if the deck runs out while the dealer
    /// must draw. Cards drawn before that stay in the dealer's hand.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealError> {
        let mut drawn_cards = Vec::new();

        while self.dealer_should_draw() {
            drawn_cards.push(self.dealer_hit()?);
        }

        log::debug!(
            "dealer stops at {} after drawing {} card(s)",
            self.dealer.best_value(),
            drawn_cards.len()
        );
        Ok(drawn_cards)
    }

    /// Resolves the round from the current hands.
    ///
    /// Call this once the player has stopped and the dealer has been driven
    /// to a stop. The hands are not modified, so repeated calls agree.
    #[must_use]
    pub fn finish(&self) -> GameResult {
        let result = resolve(self.player.cards(), self.dealer.cards());
        log::debug!(
            "round result: {result} (player {}, dealer {})",
            self.player.best_value(),
            self.dealer.best_value()
        );
        result
    }
}
