//! Core card-related types: Suit, Card

use crate::domain::rules::CARD_NUMBERS;
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Basto,
    Espadas,
    Oro,
    Copa,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Basto, Suit::Espadas, Suit::Oro, Suit::Copa];

    /// Stable index used by observation encodings (basto=0 .. copa=3).
    pub const fn index(self) -> u8 {
        match self {
            Suit::Basto => 0,
            Suit::Espadas => 1,
            Suit::Oro => 2,
            Suit::Copa => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Basto => "basto",
            Suit::Espadas => "espadas",
            Suit::Oro => "oro",
            Suit::Copa => "copa",
        }
    }

    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }
}

/// A card of the Spanish 40-card deck.
///
/// Cards carry no ordering of their own: strength only exists relative to a
/// muestra, see [`Card::value`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    number: u8,
    suit: Suit,
}

impl Card {
    /// Build a card, rejecting 8, 9 and anything outside 1..=12.
    pub fn new(number: u8, suit: Suit) -> Result<Self, DomainError> {
        if !CARD_NUMBERS.contains(&number) {
            return Err(DomainError::InvalidCard(format!(
                "{number} is not a valid card number"
            )));
        }
        Ok(Self { number, suit })
    }

    pub const fn number(self) -> u8 {
        self.number
    }

    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.number, self.suit)
    }
}

/// Every legal card exactly once, suit-major.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(CARD_NUMBERS.len() * Suit::ALL.len());
    for suit in Suit::ALL {
        for number in CARD_NUMBERS {
            deck.push(Card { number, suit });
        }
    }
    deck
}
