//! Player records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::round::Round;

/// A player and the cards they have won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier within a game.
    id: String,
    /// Number of rounds solved.
    score: u32,
    /// Cards of every round this player solved.
    cards: Vec<Card>,
}

impl Player {
    /// Creates a player with no points.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            score: 0,
            cards: Vec::new(),
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the player's score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the cards the player has won.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Awards a point and takes the round's cards.
    pub(crate) fn award(&mut self, round: &Round) {
        self.score = self.score.saturating_add(1);
        self.cards.extend_from_slice(round.cards());
    }

    /// Clears score and won cards.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.cards.clear();
    }
}
