//! Card types and deck construction.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the suit glyph used when displaying a card.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }
}

/// A playing card.
///
/// Within one deck every `(suit, number)` pair is unique, so structural
/// equality identifies a card instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The number of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub number: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the number. Values outside
    /// 1..=13 are accepted but display as `?`.
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }

    /// Returns the display symbol: `A`, `J`, `Q`, `K` for royal cards,
    /// otherwise the decimal number.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self.number {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.symbol(), self.suit.glyph())
    }
}

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a deck without Jacks, Queens and Kings.
pub const DECK_SIZE_WITHOUT_FACE_CARDS: usize = 40;

/// Builds an ordered deck.
///
/// Cards are enumerated number-major: every suit of 1, then every suit of 2,
/// and so on up to 13, or up to 10 when face cards are excluded.
#[must_use]
pub fn build_deck(include_face_cards: bool) -> Vec<Card> {
    let highest = if include_face_cards { 13 } else { 10 };
    let mut cards = Vec::with_capacity(highest as usize * Suit::ALL.len());

    for number in 1..=highest {
        for suit in Suit::ALL {
            cards.push(Card::new(suit, number));
        }
    }

    cards
}
