//! Compact observation handed to agents, and its table key.

use serde::{Deserialize, Serialize};

use crate::domain::envido::calculate_envido;
use crate::domain::rules::CARDS_PER_PLAYER;
use crate::domain::state::{PlayerState, RoundInfo};

/// Marker for an empty hand slot.
pub const EMPTY_SLOT: i8 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub hand_numbers: [i8; CARDS_PER_PLAYER],
    pub hand_suits: [i8; CARDS_PER_PLAYER],
    pub truco_state: u8,
    pub muestra_number: u8,
    pub muestra_suit: u8,
    /// Envido of the dealt hand, known once the round is attached. Cards
    /// already played still count, as they do when envido is scored. Not
    /// part of `state_key`.
    pub dealt_envido: Option<u8>,
}

impl Observation {
    /// Encode the acting player's hand; round fields stay zero unless the
    /// provider was attached to the round.
    pub fn build(state: &PlayerState, round: Option<&RoundInfo>) -> Self {
        let mut hand_numbers = [EMPTY_SLOT; CARDS_PER_PLAYER];
        let mut hand_suits = [EMPTY_SLOT; CARDS_PER_PLAYER];
        for (slot, card) in state.player_cards.iter().take(CARDS_PER_PLAYER).enumerate() {
            hand_numbers[slot] = card.number() as i8;
            hand_suits[slot] = card.suit().index() as i8;
        }

        match round {
            Some(info) => {
                let dealt = state.round_state.initial_hand(state.seat);
                Self {
                    hand_numbers,
                    hand_suits,
                    truco_state: state.round_state.truco_state.index(),
                    muestra_number: info.muestra.number(),
                    muestra_suit: info.muestra.suit().index(),
                    dealt_envido: (!dealt.is_empty())
                        .then(|| calculate_envido(dealt, info.muestra)),
                }
            }
            None => Self {
                hand_numbers,
                hand_suits,
                truco_state: 0,
                muestra_number: 0,
                muestra_suit: 0,
                dealt_envido: None,
            },
        }
    }

    /// Stable string key, e.g. `hn=(1, 7, -1)|hs=(1, 2, -1)|ts=0|mn=10|ms=2`.
    pub fn state_key(&self) -> String {
        format!(
            "hn={}|hs={}|ts={}|mn={}|ms={}",
            tuple(&self.hand_numbers),
            tuple(&self.hand_suits),
            self.truco_state,
            self.muestra_number,
            self.muestra_suit
        )
    }
}

fn tuple(values: &[i8]) -> String {
    let parts: Vec<String> = values.iter().map(i8::to_string).collect();
    format!("({})", parts.join(", "))
}
