//! Hand representation and evaluation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total that does not bust.
pub const BLACKJACK: u16 = 21;

/// Value an Ace adds to the high total.
const HIGH_ACE_VALUE: u16 = 11;

/// The candidate totals of a hand.
///
/// Holds the low total (every Ace counted as 1) and, when it differs from
/// the low total and does not bust, the high total (every Ace counted as 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValues {
    score: u16,
    high_ace_score: Option<u16>,
}

impl HandValues {
    /// Returns the low total, with every Ace counted as 1.
    #[must_use]
    pub const fn score(&self) -> u16 {
        self.score
    }

    /// Returns the high total, with every Ace counted as 11.
    ///
    /// `None` when the hand has no Ace or the high total exceeds 21.
    #[must_use]
    pub const fn high_ace_score(&self) -> Option<u16> {
        self.high_ace_score
    }

    /// Iterates over the candidate totals, low total first.
    pub fn iter(&self) -> impl Iterator<Item = u16> + use<> {
        core::iter::once(self.score).chain(self.high_ace_score)
    }

    /// Returns the number of candidate totals (1 or 2).
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.high_ace_score.is_some() { 2 } else { 1 }
    }

    /// Returns whether `total` is one of the candidate totals.
    #[must_use]
    pub fn contains(&self, total: u16) -> bool {
        self.iter().any(|value| value == total)
    }

    /// Returns the number of candidate totals that do not bust.
    #[must_use]
    pub fn viable_count(&self) -> usize {
        self.iter().filter(|&value| value <= BLACKJACK).count()
    }

    /// Returns the highest total that does not bust, if any.
    #[must_use]
    pub fn best(&self) -> Option<u16> {
        self.iter().filter(|&value| value <= BLACKJACK).max()
    }
}

impl fmt::Display for HandValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high_ace_score {
            Some(high) => write!(f, "{}/{high}", self.score),
            None => write!(f, "{}", self.score),
        }
    }
}

/// Computes the candidate totals of a hand.
///
/// Every Ace counts as 11 in the high total, not only the first one, so a
/// hand with two Aces only ever reports its low total.
///
/// ```
/// use bjrules::{Card, Rank, Suit, possible_values};
///
/// let hand = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
/// let values = possible_values(&hand);
/// assert_eq!(values.iter().collect::<Vec<_>>(), vec![11, 21]);
/// ```
#[must_use]
pub fn possible_values(cards: &[Card]) -> HandValues {
    let mut score: u16 = 0;
    let mut high_ace_score: u16 = 0;

    for card in cards {
        let value = u16::from(card.value());
        score += value;
        high_ace_score += if card.is_ace() { HIGH_ACE_VALUE } else { value };
    }

    let high_ace_score = (high_ace_score != score && high_ace_score <= BLACKJACK)
        .then_some(high_ace_score);

    HandValues {
        score,
        high_ace_score,
    }
}

/// Classification of a hand at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandAssessment {
    /// Every candidate total exceeds 21.
    Bust,
    /// Fewer than two cards.
    InsufficientCards,
    /// Two cards: an Ace and a ten-valued card.
    NaturalBlackjack,
    /// Any other hand.
    Normal,
}

impl fmt::Display for HandAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bust => "bust",
            Self::InsufficientCards => "insufficient cards",
            Self::NaturalBlackjack => "natural blackjack",
            Self::Normal => "normal",
        })
    }
}

/// Classifies a hand.
///
/// Bust is checked before the card count, then the natural.
#[must_use]
pub fn assess(cards: &[Card]) -> HandAssessment {
    if possible_values(cards).viable_count() == 0 {
        return HandAssessment::Bust;
    }

    if cards.len() < 2 {
        return HandAssessment::InsufficientCards;
    }

    if cards.len() == 2 {
        let has_ace = cards.iter().any(Card::is_ace);
        let has_ten = cards.iter().any(|card| card.value() == 10);
        if has_ace && has_ten {
            return HandAssessment::NaturalBlackjack;
        }
    }

    HandAssessment::Normal
}

/// Returns the highest non-busting total of a hand, or 0 when it is bust.
#[must_use]
pub fn best_value(cards: &[Card]) -> u16 {
    possible_values(cards).best().unwrap_or(0)
}

/// The cards held by one party, in the order they were dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the candidate totals of the hand.
    #[must_use]
    pub fn possible_values(&self) -> HandValues {
        possible_values(&self.cards)
    }

    /// Classifies the hand.
    #[must_use]
    pub fn assess(&self) -> HandAssessment {
        assess(&self.cards)
    }

    /// Returns the highest non-busting total, or 0 when the hand is bust.
    #[must_use]
    pub fn best_value(&self) -> u16 {
        best_value(&self.cards)
    }

    /// Returns whether the hand holds at least one Ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(Card::is_ace)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}
