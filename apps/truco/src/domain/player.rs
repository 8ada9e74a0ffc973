//! Players: a name plus the cards held and played this round.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::rules::CARDS_PER_PLAYER;
use crate::errors::domain::DomainError;

/// A seated player.
///
/// Identity is the name; `Table` rejects duplicate names so seats and names
/// stay interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cards: Vec<Card>,
    played_cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::with_capacity(CARDS_PER_PLAYER),
            played_cards: Vec::with_capacity(CARDS_PER_PLAYER),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hand, in dealt order minus played cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn played_cards(&self) -> &[Card] {
        &self.played_cards
    }

    /// True while no card has left the hand since the deal.
    pub fn has_full_hand(&self) -> bool {
        self.cards.len() == CARDS_PER_PLAYER
    }

    /// Replace the hand with a fresh deal and forget last round's plays.
    pub(crate) fn deal(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.played_cards.clear();
    }

    /// Remove the card at `index` and move it to the played pile.
    pub fn play_card(&mut self, index: usize) -> Result<Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::EmptyHand);
        }
        if index >= self.cards.len() {
            return Err(DomainError::InvalidCardIndex {
                index,
                hand_size: self.cards.len(),
            });
        }
        let card = self.cards.remove(index);
        self.played_cards.push(card);
        Ok(card)
    }

    /// Add one card to the hand outside of a round deal.
    pub fn add_card(&mut self, card: Card) -> Result<(), DomainError> {
        if self.cards.len() >= CARDS_PER_PLAYER {
            return Err(DomainError::HandFull);
        }
        if self.cards.contains(&card) {
            return Err(DomainError::DuplicateCard(card));
        }
        self.cards.push(card);
        Ok(())
    }
}
