//! Stacked decks for scripted rounds.

use std::collections::VecDeque;

use truco::domain::cards_parsing::try_parse_cards;
use truco::domain::DeckFactory;
use truco::{Card, Deck};

/// One round's deal: a hand per seat in seating order, then the muestra.
pub struct Deal<'a> {
    pub hands: &'a [[&'a str; 3]],
    pub muestra: &'a str,
}

impl Deal<'_> {
    /// Cards in the order the round draws them.
    pub fn draw_order(&self) -> Vec<Card> {
        let mut out: Vec<Card> = self.hands.iter().flat_map(|hand| cards(hand)).collect();
        out.extend(cards(&[self.muestra]));
        out
    }
}

/// Parse hardcoded card tokens; panics on a typo in the fixture.
pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).expect("fixture card tokens must parse")
}

/// Deck factory handing out one stacked deck per round, in order. Once
/// the deals run out it returns empty decks, which fail to deal.
pub fn stacked_decks(deals: &[Deal<'_>]) -> DeckFactory {
    let mut queue: VecDeque<Vec<Card>> = deals.iter().map(Deal::draw_order).collect();
    Box::new(move || Deck::stacked(queue.pop_front().unwrap_or_default()))
}
