//! Round settlement: truco points, flor adjustments, envido points.

use crate::domain::cards_types::Card;
use crate::domain::envido::has_flor;
use crate::domain::rules::FLOR_POINTS;
use crate::domain::state::{RoundState, TrucoState};
use crate::domain::table::{Team, TeamPoints};

/// Flor points for every declared flor; a bluff pays the other team.
pub fn flor_points(state: &RoundState, muestra: Card) -> TeamPoints {
    let mut points = TeamPoints::default();
    for &seat in &state.flor_calls {
        let team = Team::of_seat(seat);
        if has_flor(state.initial_hand(seat), muestra) {
            points.add(team, FLOR_POINTS);
        } else {
            points.add(team.opponent(), FLOR_POINTS);
        }
    }
    points
}

/// Points both teams take from a finished round.
pub fn hand_points(state: &RoundState, winner: Team, muestra: Card) -> TeamPoints {
    let mut points = TeamPoints::default();
    points.add(winner, truco_points(state.truco_state));
    points.add_all(flor_points(state, muestra));
    points.add_all(state.envido_points);
    points
}

pub const fn truco_points(state: TrucoState) -> u32 {
    state.points()
}
