//! Game session: one deck and the two hands of a round.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::{Hand, HandAssessment};
use crate::options::GameOptions;

mod actions;
mod dealer;

/// A two-party blackjack round.
///
/// The game owns the deck, the player's hand, and the dealer's hand. Every
/// mutation goes through `&mut self`, so a single game is played one round
/// at a time. Use [`GameOptions`] to configure the dealer's stopping total.
///
/// # Example
///
/// ```
/// use bjrules::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.deal_initial().unwrap();
/// while game.dealer_should_draw() {
///     game.dealer_hit().unwrap();
/// }
/// let _result = game.finish();
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
}

impl Game {
    /// Creates a new game with a deck shuffled from `seed`.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Self::create_deck(seed),
            player: Hand::new(),
            dealer: Hand::new(),
        }
    }

    /// Builds and shuffles a full deck.
    fn create_deck(seed: u64) -> Deck {
        let mut deck = Deck::build();
        deck.shuffle_with_seed(seed);
        deck
    }

    /// Starts a new round: rebuilds and reshuffles the deck and clears both hands.
    pub fn new_round(&mut self, seed: u64) {
        self.deck = Self::create_deck(seed);
        self.player.clear();
        self.dealer.clear();
        log::debug!("new round with seed {seed}");
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replaces the deck.
    pub fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    /// Returns the dealer's cards.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        self.dealer.cards()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Replaces the player's cards.
    pub fn set_player_cards(&mut self, cards: Vec<Card>) {
        self.player = Hand::from_cards(cards);
    }

    /// Replaces the dealer's cards.
    pub fn set_dealer_cards(&mut self, cards: Vec<Card>) {
        self.dealer = Hand::from_cards(cards);
    }

    /// Classifies the player's hand.
    #[must_use]
    pub fn player_assessment(&self) -> HandAssessment {
        self.player.assess()
    }

    /// Classifies the dealer's hand.
    #[must_use]
    pub fn dealer_assessment(&self) -> HandAssessment {
        self.dealer.assess()
    }
}
