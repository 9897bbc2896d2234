//! A game engine for the 24 card puzzle with optional `no_std` support.
//!
//! Four cards are drawn from a deck and players race to combine their numbers
//! with `+ - * /` and parentheses into exactly 24, using every card once.
//!
//! The crate provides a [`Game`] type that manages the deck, rounds, scoring,
//! and event notifications, an exhaustive [`solve`] function, and a safe
//! [`evaluate`] function that checks a submitted expression against a round.
//!
//! # Example
//!
//! ```no_run
//! use twentyfour::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.start().unwrap();
//! let _ = game.current_round();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod expression;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod round;
pub mod solver;

// Re-export main types
pub use card::{Card, DECK_SIZE, DECK_SIZE_WITHOUT_FACE_CARDS, Suit, build_deck};
pub use error::{ActionError, ExpressionError, StartError};
pub use event::{EventKind, GameEvent, ListenerId};
pub use expression::evaluate;
pub use game::{Game, GameState};
pub use options::GameOptions;
pub use player::Player;
pub use result::AttemptOutcome;
pub use round::{ROUND_SIZE, Round};
pub use solver::{TARGET, has_solution, solve};
