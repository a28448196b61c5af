//! Error types for deck and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck for the initial deal")]
    NotEnoughCards,
}

/// Errors that can occur while building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}
