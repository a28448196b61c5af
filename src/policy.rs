//! Dealer draw policy.

use crate::card::Card;
use crate::hand::{HandAssessment, assess, best_value};

/// Total at which the dealer stops drawing by default.
pub const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer should draw another card.
///
/// The dealer draws below 17 and never draws once bust. Soft and hard totals
/// are treated alike: only the best non-busting total matters.
///
/// ```
/// use bjrules::{Card, Rank, Suit, should_draw};
///
/// let sixteen = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Six, Suit::Hearts)];
/// assert!(should_draw(&sixteen));
///
/// let seventeen = [Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Seven, Suit::Hearts)];
/// assert!(!should_draw(&seventeen));
/// ```
#[must_use]
pub fn should_draw(cards: &[Card]) -> bool {
    should_draw_with(cards, DEALER_STANDS_ON)
}

/// Returns whether the dealer should draw, stopping at `stands_on`.
#[must_use]
pub fn should_draw_with(cards: &[Card], stands_on: u8) -> bool {
    if assess(cards) == HandAssessment::Bust {
        return false;
    }

    best_value(cards) < u16::from(stands_on)
}
