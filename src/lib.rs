//! A two-party blackjack rules engine with optional `no_std` support.
//!
//! The crate provides the pure rules of a dealer-versus-player round:
//! [`possible_values`] and [`assess`] evaluate a hand, [`should_draw`] decides
//! whether the dealer draws, and [`resolve`] settles the round. The [`Game`]
//! type ties them to a seeded [`Deck`] and the two hands.
//!
//! # Example
//!
//! ```
//! use bjrules::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.deal_initial().unwrap();
//! game.dealer_play().unwrap();
//! println!("{}", game.finish());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod policy;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError};
pub use game::Game;
pub use hand::{BLACKJACK, Hand, HandAssessment, HandValues, assess, best_value, possible_values};
pub use options::GameOptions;
pub use policy::{DEALER_STANDS_ON, should_draw, should_draw_with};
pub use result::{GameResult, resolve};
