//! Round progress records and the snapshots handed to providers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::table::{Seat, Team, TeamPoints};
use crate::errors::domain::DomainError;

/// Accepted truco level. Only moves forward within a round.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TrucoState {
    #[default]
    Nada,
    Truco,
    Retruco,
    Vale4,
}

impl TrucoState {
    pub const fn index(self) -> u8 {
        match self {
            TrucoState::Nada => 0,
            TrucoState::Truco => 1,
            TrucoState::Retruco => 2,
            TrucoState::Vale4 => 3,
        }
    }

    /// Round points for the trick winner at this level.
    pub const fn points(self) -> u32 {
        self.index() as u32 + 1
    }

    /// Level a raise from here would reach.
    pub fn next(self) -> Result<TrucoState, DomainError> {
        match self {
            TrucoState::Nada => Ok(TrucoState::Truco),
            TrucoState::Truco => Ok(TrucoState::Retruco),
            TrucoState::Retruco => Ok(TrucoState::Vale4),
            TrucoState::Vale4 => Err(DomainError::CannotAdvanceTrucoState),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvidoState {
    #[default]
    Nada,
    Envido,
    Querido,
    NoQuiero,
}

/// One finished trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    /// Cards in play order.
    pub plays: Vec<(Seat, Card)>,
    /// `None` when the best rank was shared.
    pub winner: Option<Seat>,
}

/// Mutable record of one round's progress, owned by the round driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub truco_state: TrucoState,
    pub envido_state: EnvidoState,
    /// Latest card from each seat; overwritten every trick.
    pub cards_played_this_round: BTreeMap<Seat, Card>,
    /// Completed tricks in order.
    pub tricks: Vec<TrickRecord>,
    /// Seats that declared flor, in call order.
    pub flor_calls: Vec<Seat>,
    /// Hands as dealt; never touched after the deal.
    pub player_initial_hands: BTreeMap<Seat, Vec<Card>>,
    pub envido_bidder: Option<Seat>,
    pub envido_points: TeamPoints,
    pub last_truco_bidder: Option<Seat>,
}

impl RoundState {
    pub fn new(initial_hands: BTreeMap<Seat, Vec<Card>>) -> Self {
        Self {
            player_initial_hands: initial_hands,
            ..Self::default()
        }
    }

    pub fn has_called_flor(&self, seat: Seat) -> bool {
        self.flor_calls.contains(&seat)
    }

    pub fn initial_hand(&self, seat: Seat) -> &[Card] {
        self.player_initial_hands
            .get(&seat)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A teammate's current hand, included when the game shows teammate cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeammateHand {
    pub seat: Seat,
    pub cards: Vec<Card>,
}

/// Read-only view of the round for the acting player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub seat: Seat,
    pub team: Team,
    pub round_state: RoundState,
    pub player_cards: Vec<Card>,
    pub teammate_cards: Option<Vec<TeammateHand>>,
}

/// Fixed facts about a round, handed to providers that track the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub muestra: Card,
    pub starting_seat: Seat,
    pub seat_count: usize,
}
