//! The 52-card deck.

use alloc::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, DeckError};

/// An ordered deck of unique cards.
///
/// Cards are dealt from the front. A freshly built deck holds one card per
/// rank and suit, suit-major (Hearts, Diamonds, Clubs, Spades) and
/// rank-minor (Ace through King).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a full, unshuffled deck.
    ///
    /// ```
    /// use bjrules::{Card, DECK_SIZE, Deck, Rank, Suit};
    ///
    /// let deck = Deck::build();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards().next(), Some(&Card::new(Rank::Ace, Suit::Hearts)));
    /// ```
    #[must_use]
    pub fn build() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a full deck. Same as [`Deck::build`].
    #[must_use]
    pub fn new() -> Self {
        Self::build()
    }

    /// Creates a deck that deals the given cards in order.
    ///
    /// The deck does not need to be complete, which makes this useful for
    /// replaying a known sequence of cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice.
    pub fn from_cards<I>(cards: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut deck = VecDeque::new();
        for card in cards {
            if deck.contains(&card) {
                return Err(DeckError::DuplicateCard(card));
            }
            deck.push_back(card);
        }
        Ok(Self { cards: deck })
    }

    /// Shuffles the remaining cards with the given random number generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Shuffles the remaining cards with a generator seeded from `seed`.
    ///
    /// The same seed applied to the same deck always yields the same order.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards are left.
    pub fn deal_one_card(&mut self) -> Result<Card, DealError> {
        let card = self.cards.pop_front().ok_or_else(|| {
            log::warn!("attempted to deal from an empty deck");
            DealError::EmptyDeck
        })?;
        log::trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the remaining cards in deal order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::build()
    }
}
