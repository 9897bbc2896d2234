//! The four cards in play.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::solver;

/// Number of cards in a round.
pub const ROUND_SIZE: usize = 4;

/// The four cards currently in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    cards: [Card; ROUND_SIZE],
}

impl Round {
    /// Creates a round from four cards.
    #[must_use]
    pub const fn new(cards: [Card; ROUND_SIZE]) -> Self {
        Self { cards }
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub const fn cards(&self) -> &[Card; ROUND_SIZE] {
        &self.cards
    }

    /// Returns the card numbers in draw order.
    #[must_use]
    pub fn numbers(&self) -> [u8; ROUND_SIZE] {
        self.cards.map(|card| card.number)
    }

    /// Returns whether the card is part of this round.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns every expression over this round's numbers that makes 24.
    #[must_use]
    pub fn solutions(&self) -> Vec<String> {
        solver::solve(self.numbers())
    }

    /// Returns whether any expression over this round's numbers makes 24.
    #[must_use]
    pub fn has_solution(&self) -> bool {
        solver::has_solution(self.numbers())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
