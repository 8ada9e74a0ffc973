//! Fixed table rules: deal size, deck composition, and bid values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cards dealt to every player at the start of a round.
pub const CARDS_PER_PLAYER: usize = 3;

/// Tricks a team needs to take the round outright.
pub const HANDS_TO_WIN_ROUND: u8 = (CARDS_PER_PLAYER / 2 + 1) as u8;

/// Size of the Spanish deck without 8s and 9s.
pub const DECK_SIZE: usize = 40;

/// Legal card numbers in normal-tier order, weakest first.
pub const CARD_NUMBERS: [u8; 10] = [4, 5, 6, 7, 10, 11, 12, 1, 2, 3];

/// Numbers that become piezas when they share the muestra's suit.
pub const PIEZA_NUMBERS: [u8; 5] = [2, 4, 5, 10, 11];

/// The king substitutes for the muestra's number when the muestra is itself a pieza number.
pub const REY: u8 = 12;

pub const ENVIDO_ACCEPTED_POINTS: u32 = 2;
pub const ENVIDO_REJECTED_POINTS: u32 = 1;
pub const FLOR_POINTS: u32 = 3;

/// Bonus added to the envido value when two cards share a suit.
pub const ENVIDO_SAME_SUIT_BONUS: u8 = 20;

/// Largest seat count whose deal (plus the muestra) fits the deck.
pub const fn max_seats() -> usize {
    let fit = (DECK_SIZE - 1) / CARDS_PER_PLAYER;
    // teams alternate, so the table needs an even seat count
    fit - fit % 2
}

/// Cards left in a fresh deck after dealing `seats` hands and the muestra.
pub fn cards_left_after_deal(seats: usize) -> Option<usize> {
    DECK_SIZE.checked_sub(seats * CARDS_PER_PLAYER + 1)
}

/// Who answers a truco raise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrucoResponder {
    /// The first opponent seated after the bidder.
    #[default]
    NextOpponent,
    /// The opposing team's last player in the round's rotation.
    Pie,
}

impl TrucoResponder {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrucoResponder::NextOpponent => "next_opponent",
            TrucoResponder::Pie => "pie",
        }
    }
}

impl fmt::Display for TrucoResponder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrucoResponder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "next_opponent" => Ok(TrucoResponder::NextOpponent),
            "pie" => Ok(TrucoResponder::Pie),
            other => Err(format!("unknown truco responder '{other}'")),
        }
    }
}
