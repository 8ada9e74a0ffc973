//! The deck: a bag of the 40 cards drawn without replacement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::cards_types::{full_deck, Card};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
enum DrawOrder {
    /// Uniform sampling without replacement.
    Random(ChaCha20Rng),
    /// Cards leave in the order they were stacked.
    Stacked,
}

/// Remaining cards of one round's deck.
///
/// A fresh deck is built for every round and dropped when the round ends.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    order: DrawOrder,
}

impl Deck {
    /// Full deck sampled with the given RNG.
    pub fn shuffled(rng: ChaCha20Rng) -> Self {
        Self {
            cards: full_deck(),
            order: DrawOrder::Random(rng),
        }
    }

    /// Full deck whose draws are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::shuffled(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Full deck seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::shuffled(ChaCha20Rng::from_rng(&mut rand::rng()))
    }

    /// Deck that deals exactly `cards`, front first.
    ///
    /// Used to replay recorded deals and to script scenarios.
    pub fn stacked(cards: Vec<Card>) -> Self {
        Self {
            cards,
            order: DrawOrder::Stacked,
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove and return `n` cards.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        match &mut self.order {
            DrawOrder::Stacked => Ok(self.cards.drain(..n).collect()),
            DrawOrder::Random(rng) => {
                let mut drawn = Vec::with_capacity(n);
                for _ in 0..n {
                    let idx = rng.random_range(0..self.cards.len());
                    drawn.push(self.cards.swap_remove(idx));
                }
                Ok(drawn)
            }
        }
    }

    /// Draw a single card (the muestra).
    pub fn draw_one(&mut self) -> Result<Card, DomainError> {
        let mut drawn = self.draw(1)?;
        drawn.pop().ok_or(DomainError::InsufficientCards {
            requested: 1,
            remaining: 0,
        })
    }
}
