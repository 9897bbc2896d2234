//! Game configuration options.

use crate::card::{DECK_SIZE, DECK_SIZE_WITHOUT_FACE_CARDS};

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyfour::GameOptions;
///
/// let options = GameOptions::default().with_include_face_cards(true);
/// assert_eq!(options.deck_size(), 52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameOptions {
    /// Whether Jacks, Queens and Kings (11, 12, 13) are in the deck.
    pub include_face_cards: bool,
}

impl GameOptions {
    /// Sets whether face cards are included in the deck.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyfour::GameOptions;
    ///
    /// let options = GameOptions::default().with_include_face_cards(true);
    /// assert!(options.include_face_cards);
    /// ```
    #[must_use]
    pub const fn with_include_face_cards(mut self, include: bool) -> Self {
        self.include_face_cards = include;
        self
    }

    /// Returns the number of cards in a freshly built deck.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        if self.include_face_cards {
            DECK_SIZE
        } else {
            DECK_SIZE_WITHOUT_FACE_CARDS
        }
    }
}
