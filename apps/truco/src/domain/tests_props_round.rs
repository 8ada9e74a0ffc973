use std::sync::Mutex;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::ai::{ActionProvider, AiError};
use crate::domain::round::RoundOptions;
use crate::domain::test_prelude::proptest_config;
use crate::domain::{
    ActionCode, Deck, Player, PlayerState, Round, Seat, Table, Team, TrucoResponder, TrucoState,
};

/// What a provider saw on one call.
#[derive(Debug, Clone)]
struct Seen {
    seat: Seat,
    team: Team,
    truco_state: TrucoState,
    last_truco_bidder: Option<Seat>,
    available: Vec<ActionCode>,
}

/// Picks uniformly among the offered codes and remembers every call.
struct RecordingRandom {
    rng: Mutex<StdRng>,
    seen: Mutex<Vec<Seen>>,
}

impl RecordingRandom {
    fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl ActionProvider for RecordingRandom {
    fn choose_action(
        &self,
        _player: &Player,
        state: &PlayerState,
        available: &[ActionCode],
    ) -> Result<ActionCode, AiError> {
        self.seen.lock().unwrap().push(Seen {
            seat: state.seat,
            team: state.team,
            truco_state: state.round_state.truco_state,
            last_truco_bidder: state.round_state.last_truco_bidder,
            available: available.to_vec(),
        });
        let mut rng = self.rng.lock().unwrap();
        available.choose(&mut *rng).copied().ok_or(AiError::NoActions)
    }
}

fn responder() -> impl Strategy<Value = TrucoResponder> {
    prop_oneof![Just(TrucoResponder::NextOpponent), Just(TrucoResponder::Pie)]
}

/// Team size, starting seat, deck seed, provider seed and responder rule.
fn random_round() -> impl Strategy<Value = (usize, Seat, u64, u64, TrucoResponder)> {
    (1usize..=3).prop_flat_map(|team_size| {
        (
            Just(team_size),
            0..team_size * 2,
            any::<u64>(),
            any::<u64>(),
            responder(),
        )
    })
}

proptest! {
    #![proptest_config(proptest_config())]

    /// The accepted truco level never drops during a round, and the outcome
    /// reports the last level any player saw or higher.
    #[test]
    fn prop_truco_state_non_decreasing(
        (team_size, start, deck_seed, seed, truco_responder) in random_round()
    ) {
        let provider = RecordingRandom::new(seed);
        let mut table = Table::with_generated_names(team_size).unwrap();
        let options = RoundOptions { truco_responder, ..RoundOptions::default() };
        let mut round =
            Round::new(&mut table, &provider, Deck::seeded(deck_seed), start, options).unwrap();
        let outcome = round.play_round().unwrap();

        let seen = provider.seen.lock().unwrap();
        prop_assert!(!seen.is_empty());
        for pair in seen.windows(2) {
            prop_assert!(
                pair[0].truco_state <= pair[1].truco_state,
                "truco went from {:?} to {:?}",
                pair[0].truco_state,
                pair[1].truco_state
            );
        }
        let last = seen.last().map(|s| s.truco_state).unwrap_or_default();
        prop_assert!(outcome.truco_state >= last);
    }

    /// On its own turn a seat is offered a raise exactly when the level is
    /// below vale4 and its own team did not make the last raise.
    #[test]
    fn prop_truco_offer_gating(
        (team_size, start, deck_seed, seed, truco_responder) in random_round()
    ) {
        let provider = RecordingRandom::new(seed);
        let mut table = Table::with_generated_names(team_size).unwrap();
        let options = RoundOptions { truco_responder, ..RoundOptions::default() };
        let mut round =
            Round::new(&mut table, &provider, Deck::seeded(deck_seed), start, options).unwrap();
        round.play_round().unwrap();

        let seen = provider.seen.lock().unwrap();
        for call in seen.iter().filter(|s| s.available.iter().any(|a| a.card_index().is_some())) {
            let may_raise = call.truco_state != TrucoState::Vale4
                && call.last_truco_bidder.is_none_or(|b| Team::of_seat(b) != call.team);
            prop_assert_eq!(
                call.available.contains(&ActionCode::OfferTruco),
                may_raise,
                "seat {} at {:?} after bidder {:?}",
                call.seat,
                call.truco_state,
                call.last_truco_bidder
            );
        }
    }
}
