//! Card strength relative to the muestra: piezas, matas, and the normal order.

use super::cards_types::{Card, Suit};
use super::rules::{PIEZA_NUMBERS, REY};

/// Number a card counts as when it is a pieza (a king stands in for the muestra's number).
pub fn pieza_number(card: Card, muestra: Card) -> Option<u8> {
    if card.suit() != muestra.suit() {
        return None;
    }
    if PIEZA_NUMBERS.contains(&card.number()) {
        return Some(card.number());
    }
    if card.number() == REY && PIEZA_NUMBERS.contains(&muestra.number()) {
        return Some(muestra.number());
    }
    None
}

pub fn is_pieza(card: Card, muestra: Card) -> bool {
    pieza_number(card, muestra).is_some()
}

fn pieza_rank(number: u8) -> u8 {
    match number {
        10 => 14,
        11 => 15,
        5 => 16,
        4 => 17,
        _ => 18, // 2
    }
}

fn mata_rank(card: Card) -> Option<u8> {
    match (card.number(), card.suit()) {
        (7, Suit::Oro) => Some(10),
        (7, Suit::Espadas) => Some(11),
        (1, Suit::Basto) => Some(12),
        (1, Suit::Espadas) => Some(13),
        _ => None,
    }
}

fn normal_rank(number: u8) -> u8 {
    match number {
        4 => 0,
        5 => 1,
        6 => 2,
        7 => 3,
        10 => 4,
        11 => 5,
        12 => 6,
        1 => 7,
        2 => 8,
        _ => 9, // 3
    }
}

/// Integer strength of `card` under `muestra`; pieza beats mata beats normal.
pub fn card_value(card: Card, muestra: Card) -> u8 {
    if let Some(number) = pieza_number(card, muestra) {
        return pieza_rank(number);
    }
    base_value(card)
}

/// Strength ignoring piezas, for callers that do not know the muestra.
pub fn base_value(card: Card) -> u8 {
    mata_rank(card).unwrap_or_else(|| normal_rank(card.number()))
}

/// Strict comparison; equal strength beats neither way.
pub fn card_beats(a: Card, b: Card, muestra: Card) -> bool {
    card_value(a, muestra) > card_value(b, muestra)
}

/// Face value for envido: figures (10, 11, 12) count zero.
pub fn envido_face_value(card: Card) -> u8 {
    if card.number() >= 10 {
        0
    } else {
        card.number()
    }
}

/// Envido value of a pieza, `None` for ordinary cards.
pub fn pieza_envido_value(card: Card, muestra: Card) -> Option<u8> {
    pieza_number(card, muestra).map(|number| match number {
        2 => 30,
        4 => 29,
        5 => 28,
        _ => 27, // 10, 11
    })
}

impl Card {
    pub fn value(&self, muestra: Card) -> u8 {
        card_value(*self, muestra)
    }

    pub fn is_greater_than(&self, other: &Card, muestra: Card) -> bool {
        card_beats(*self, *other, muestra)
    }

    pub fn is_pieza(&self, muestra: Card) -> bool {
        is_pieza(*self, muestra)
    }
}
