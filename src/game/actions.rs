use crate::card::Card;
use crate::error::DealError;

use super::Game;

/// Cards each party receives on the initial deal.
const INITIAL_CARDS: usize = 2;

impl Game {
    /// Deals the initial two cards to the player, then two to the dealer.
    ///
    /// Both hands are cleared first.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than four cards remain.
    /// The deck and hands are left untouched in that case.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.deck.len() < INITIAL_CARDS * 2 {
            return Err(DealError::NotEnoughCards);
        }

        self.deal_initial_player()?;
        self.deal_initial_dealer()?;

        log::debug!(
            "initial deal: player {:?}, dealer {:?}",
            self.player.cards(),
            self.dealer.cards()
        );
        Ok(())
    }

    /// Clears the player's hand and deals two cards to it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than two cards remain.
    pub fn deal_initial_player(&mut self) -> Result<(), DealError> {
        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.player.clear();
        for _ in 0..INITIAL_CARDS {
            let card = self.deck.deal_one_card()?;
            self.player.add_card(card);
        }
        Ok(())
    }

    /// Clears the dealer's hand and deals two cards to it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than two cards remain.
    pub fn deal_initial_dealer(&mut self) -> Result<(), DealError> {
        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.dealer.clear();
        for _ in 0..INITIAL_CARDS {
            let card = self.deck.deal_one_card()?;
            self.dealer.add_card(card);
        }
        Ok(())
    }

    /// Player action: hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn player_hit(&mut self) -> Result<Card, DealError> {
        let card = self.deck.deal_one_card()?;
        self.player.add_card(card);
        log::trace!("player draws {card}");
        Ok(card)
    }

    /// Deals one card to the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn dealer_hit(&mut self) -> Result<Card, DealError> {
        let card = self.deck.deal_one_card()?;
        self.dealer.add_card(card);
        log::trace!("dealer draws {card}");
        Ok(card)
    }
}
