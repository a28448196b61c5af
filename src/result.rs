//! Round outcome types and resolution.

use core::fmt;

use crate::card::Card;
use crate::hand::{HandAssessment, assess, best_value};

/// Outcome of a completed round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWon,
    /// Player loses (player busts or dealer has the higher total).
    PlayerLost,
    /// Push (tie, or both sides hold a natural).
    Push,
    /// Player has a natural and the dealer does not.
    NaturalBlackjack,
}

impl GameResult {
    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_player_win(&self) -> bool {
        matches!(self, Self::PlayerWon | Self::NaturalBlackjack)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PlayerWon => "player won",
            Self::PlayerLost => "player lost",
            Self::Push => "push",
            Self::NaturalBlackjack => "natural blackjack",
        })
    }
}

/// Determines the outcome of a round from the final hands.
///
/// Naturals are settled first, then a player bust, then a dealer bust, and
/// only then are the best totals compared. A player bust therefore loses
/// even when the dealer busts too.
///
/// ```
/// use bjrules::{Card, GameResult, Rank, Suit, resolve};
///
/// let player = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
/// let dealer = [Card::new(Rank::Nine, Suit::Clubs), Card::new(Rank::Nine, Suit::Hearts)];
/// assert_eq!(resolve(&player, &dealer), GameResult::NaturalBlackjack);
/// ```
#[must_use]
pub fn resolve(player: &[Card], dealer: &[Card]) -> GameResult {
    let player_best = best_value(player);
    let dealer_best = best_value(dealer);
    let player_assessment = assess(player);
    let dealer_assessment = assess(dealer);

    let player_natural = player_assessment == HandAssessment::NaturalBlackjack;
    let dealer_natural = dealer_assessment == HandAssessment::NaturalBlackjack;

    if player_natural && !dealer_natural {
        GameResult::NaturalBlackjack
    } else if player_natural && dealer_natural {
        GameResult::Push
    } else if player_assessment == HandAssessment::Bust {
        GameResult::PlayerLost
    } else if dealer_assessment == HandAssessment::Bust {
        GameResult::PlayerWon
    } else {
        match player_best.cmp(&dealer_best) {
            core::cmp::Ordering::Greater => GameResult::PlayerWon,
            core::cmp::Ordering::Less => GameResult::PlayerLost,
            core::cmp::Ordering::Equal => GameResult::Push,
        }
    }
}
