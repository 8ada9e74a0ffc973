// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::rules::CARDS_PER_PLAYER;
use crate::domain::{full_deck, Card, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Basto),
        Just(Suit::Espadas),
        Just(Suit::Oro),
        Just(Suit::Copa),
    ]
}

pub fn card() -> impl Strategy<Value = Card> {
    let deck = full_deck();
    (0..deck.len()).prop_map(move |i| deck[i])
}

/// `count` distinct cards from one deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all = full_deck();
        for i in 0..count.min(all.len()) {
            let j = rng.random_range(i..all.len());
            all.swap(i, j);
        }
        all.truncate(count);
        all
    })
}

/// A dealt hand plus a muestra that is not in it.
pub fn hand_and_muestra() -> impl Strategy<Value = (Vec<Card>, Card)> {
    unique_cards(CARDS_PER_PLAYER + 1).prop_map(|mut cards| {
        let muestra = cards.pop().unwrap();
        (cards, muestra)
    })
}
