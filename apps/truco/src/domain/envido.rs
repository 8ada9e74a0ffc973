//! Envido values and flor detection, always computed on the dealt hand.

use std::collections::BTreeMap;

use crate::domain::cards_logic::{envido_face_value, is_pieza, pieza_envido_value};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::rules::{CARDS_PER_PLAYER, ENVIDO_SAME_SUIT_BONUS};

/// Envido value of `cards` under `muestra`.
///
/// With a pieza: the best pieza's value plus the best face value among the
/// other cards. Without: the best two same-suit face values plus 20, or the
/// best single face value when no suit repeats.
pub fn calculate_envido(cards: &[Card], muestra: Card) -> u8 {
    let best_pieza = cards
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| pieza_envido_value(c, muestra).map(|v| (i, v)))
        .max_by_key(|&(_, v)| v);

    if let Some((pieza_idx, pieza_value)) = best_pieza {
        let rest = cards
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != pieza_idx)
            .map(|(_, &c)| envido_face_value(c))
            .max()
            .unwrap_or(0);
        return pieza_value + rest;
    }

    let mut by_suit: BTreeMap<Suit, Vec<u8>> = BTreeMap::new();
    for &c in cards {
        by_suit.entry(c.suit()).or_default().push(envido_face_value(c));
    }
    by_suit
        .into_values()
        .map(|mut values| {
            values.sort_unstable_by(|a, b| b.cmp(a));
            match values.as_slice() {
                [single] => *single,
                [a, b, ..] => a + b + ENVIDO_SAME_SUIT_BONUS,
                [] => 0,
            }
        })
        .max()
        .unwrap_or(0)
}

/// Whether a dealt hand of three cards is a flor under `muestra`.
///
/// Two or more piezas; or one pieza with the other two sharing a suit; or
/// three cards of one suit.
pub fn has_flor(cards: &[Card], muestra: Card) -> bool {
    if cards.len() != CARDS_PER_PLAYER {
        return false;
    }
    let (piezas, others): (Vec<Card>, Vec<Card>) =
        cards.iter().partition(|&&c| is_pieza(c, muestra));
    match piezas.len() {
        0 => others.iter().all(|c| c.suit() == others[0].suit()),
        1 => others[0].suit() == others[1].suit(),
        _ => true,
    }
}
