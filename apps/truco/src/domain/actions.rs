//! Action codes exchanged with action providers.
//!
//! The numeric values are a stable contract: trained agent tables key on
//! them, so variants must never be renumbered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::CARDS_PER_PLAYER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum ActionCode {
    PlayCard0 = 0,
    PlayCard1 = 1,
    PlayCard2 = 2,
    OfferTruco = 3,
    AcceptTruco = 4,
    RejectTruco = 5,
    Flor = 6,
    OfferEnvido = 7,
    AcceptEnvido = 8,
    RejectEnvido = 9,
}

impl ActionCode {
    pub const ALL: [ActionCode; 10] = [
        ActionCode::PlayCard0,
        ActionCode::PlayCard1,
        ActionCode::PlayCard2,
        ActionCode::OfferTruco,
        ActionCode::AcceptTruco,
        ActionCode::RejectTruco,
        ActionCode::Flor,
        ActionCode::OfferEnvido,
        ActionCode::AcceptEnvido,
        ActionCode::RejectEnvido,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Play action for hand slot `index`, if the slot exists.
    pub fn play_card(index: usize) -> Option<ActionCode> {
        match index {
            0 => Some(ActionCode::PlayCard0),
            1 => Some(ActionCode::PlayCard1),
            2 => Some(ActionCode::PlayCard2),
            _ => None,
        }
    }

    /// Hand slot for a play action.
    pub const fn card_index(self) -> Option<usize> {
        match self {
            ActionCode::PlayCard0 => Some(0),
            ActionCode::PlayCard1 => Some(1),
            ActionCode::PlayCard2 => Some(2),
            _ => None,
        }
    }

    pub const fn is_play(self) -> bool {
        self.card_index().is_some()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ActionCode::PlayCard0 => "PLAY_CARD_0",
            ActionCode::PlayCard1 => "PLAY_CARD_1",
            ActionCode::PlayCard2 => "PLAY_CARD_2",
            ActionCode::OfferTruco => "OFFER_TRUCO",
            ActionCode::AcceptTruco => "ACCEPT_TRUCO",
            ActionCode::RejectTruco => "REJECT_TRUCO",
            ActionCode::Flor => "FLOR",
            ActionCode::OfferEnvido => "OFFER_ENVIDO",
            ActionCode::AcceptEnvido => "ACCEPT_ENVIDO",
            ActionCode::RejectEnvido => "REJECT_ENVIDO",
        }
    }
}

const _: () = assert!(CARDS_PER_PLAYER == 3, "one play code per hand slot");

impl From<ActionCode> for u8 {
    fn from(code: ActionCode) -> u8 {
        code as u8
    }
}

impl TryFrom<u8> for ActionCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ActionCode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| format!("unknown action code {value}"))
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
