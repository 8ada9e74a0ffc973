use std::sync::{Arc, Mutex};

use crate::domain::round::RoundOptions;
use crate::domain::rules::{TrucoResponder, CARDS_PER_PLAYER, DECK_SIZE};
use crate::domain::state::TeammateHand;
use crate::domain::test_prelude::{c, deal_order, first_card, FnProvider};
use crate::domain::{
    ActionCode, Deck, EnvidoState, PlayerState, Resolution, Round, Seat, Table, Team, TrucoState,
};
use crate::errors::domain::DomainError;

const GOD_VS_TRASH: [[&str; 3]; 2] = [["1E", "1B", "7E"], ["4B", "5B", "6O"]];

const PLAIN: RoundOptions = RoundOptions {
    show_teammate_cards: false,
    truco_responder: TrucoResponder::NextOpponent,
};

fn heads_up() -> Table {
    Table::with_generated_names(1).unwrap()
}

fn stacked(hands: &[[&str; 3]], muestra: &str) -> Deck {
    Deck::stacked(deal_order(hands, muestra))
}

/// Seat `actor` takes `bid` when offered; everyone answers `accept`.
fn bidder(
    actor: usize,
    bid: ActionCode,
    accept: bool,
) -> impl Fn(&PlayerState, &[ActionCode]) -> ActionCode {
    let base = first_card(accept);
    move |state: &PlayerState, available: &[ActionCode]| {
        if state.seat == actor && available.contains(&bid) {
            bid
        } else {
            base(state, available)
        }
    }
}

#[test]
fn deal_gives_three_cards_and_muestra() {
    let mut table = heads_up();
    let provider = FnProvider(first_card(true));
    let round = Round::new(
        &mut table,
        &provider,
        stacked(&GOD_VS_TRASH, "3C"),
        0,
        PLAIN,
    )
    .unwrap();
    assert_eq!(round.muestra(), c("3C"));
    assert_eq!(round.state().initial_hand(0), &[c("1E"), c("1B"), c("7E")]);
    assert_eq!(round.table().player(1).cards().len(), CARDS_PER_PLAYER);
    assert_eq!(round.remaining_in_deck(), 0);
    assert_eq!(round.state().truco_state, TrucoState::Nada);
    assert!(round.state().flor_calls.is_empty());
}

#[test]
fn opening_actions() {
    let mut table = heads_up();
    let provider = FnProvider(first_card(true));
    let round = Round::new(&mut table, &provider, Deck::seeded(3), 0, PLAIN).unwrap();
    assert_eq!(
        round.get_available_actions(0),
        vec![
            ActionCode::PlayCard0,
            ActionCode::PlayCard1,
            ActionCode::PlayCard2,
            ActionCode::OfferTruco,
            ActionCode::Flor,
            ActionCode::OfferEnvido,
        ]
    );
}

#[test]
fn deck_remaining_after_deal() {
    for team_size in 1..=6 {
        let mut table = Table::with_generated_names(team_size).unwrap();
        let provider = FnProvider(first_card(true));
        let round = Round::new(&mut table, &provider, Deck::seeded(11), 0, PLAIN).unwrap();
        let seats = team_size * 2;
        assert_eq!(
            round.remaining_in_deck(),
            DECK_SIZE - CARDS_PER_PLAYER * seats - 1
        );
    }
}

#[test]
fn short_deck_fails_deal() {
    let mut table = heads_up();
    let provider = FnProvider(first_card(true));
    let deck = Deck::stacked(deal_order(&GOD_VS_TRASH[..1], "3C"));
    let err = Round::new(&mut table, &provider, deck, 0, PLAIN).err();
    assert!(matches!(err, Some(DomainError::InsufficientCards { .. })));
}

#[test]
fn starting_seat_must_exist() {
    let mut table = heads_up();
    let provider = FnProvider(first_card(true));
    let err = Round::new(&mut table, &provider, Deck::seeded(1), 2, PLAIN).err();
    assert!(matches!(err, Some(DomainError::InvalidConfig(_))));
}

#[test]
fn tied_first_trick_then_second_decides() {
    let mut table = heads_up();
    let provider = FnProvider(first_card(true));
    let deck = stacked(&[["3B", "6B", "5O"], ["3E", "7B", "4B"]], "4C");
    let mut round = Round::new(&mut table, &provider, deck, 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(outcome.winner, Team::Two);
    assert_eq!(outcome.tricks.len(), 2);
    assert_eq!(outcome.tricks[0].winner, None);
    assert_eq!(outcome.tricks[1].winner, Some(1));
    assert_eq!(outcome.points.as_tuple(), (0, 1));
    // trick three never played
    assert_eq!(round.table().player(0).cards(), &[c("5O")]);
}

#[test]
fn rejected_truco_ends_round_for_bidder() {
    let mut table = heads_up();
    let provider = FnProvider(bidder(0, ActionCode::OfferTruco, false));
    let mut round =
        Round::new(&mut table, &provider, stacked(&GOD_VS_TRASH, "3C"), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(outcome.winner, Team::One);
    assert_eq!(outcome.resolution, Resolution::TrucoRejected);
    assert_eq!(outcome.truco_state, TrucoState::Nada);
    assert_eq!(outcome.points.as_tuple(), (1, 0));
    assert!(outcome.tricks.is_empty());
}

#[test]
fn accepted_truco_pays_two() {
    let mut table = heads_up();
    let provider = FnProvider(bidder(0, ActionCode::OfferTruco, true));
    let mut round =
        Round::new(&mut table, &provider, stacked(&GOD_VS_TRASH, "3C"), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(outcome.resolution, Resolution::Tricks);
    assert_eq!(outcome.truco_state, TrucoState::Truco);
    assert_eq!(round.state().last_truco_bidder, Some(0));
    assert_eq!(outcome.points.as_tuple(), (2, 0));
}

#[test]
fn rejected_envido_pays_bidder_one() {
    let mut table = heads_up();
    let provider = FnProvider(bidder(1, ActionCode::OfferEnvido, false));
    let mut round =
        Round::new(&mut table, &provider, stacked(&GOD_VS_TRASH, "3C"), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(round.state().envido_state, EnvidoState::NoQuiero);
    assert_eq!(round.state().envido_bidder, Some(1));
    assert_eq!(outcome.envido_points.as_tuple(), (0, 1));
    assert_eq!(outcome.winner, Team::One);
    assert_eq!(outcome.points.as_tuple(), (1, 1));
}

#[test]
fn accepted_envido_goes_to_higher_hand() {
    let mut table = heads_up();
    let provider = FnProvider(bidder(0, ActionCode::OfferEnvido, true));
    // 28 for seat 0 against 29 for seat 1
    let mut round =
        Round::new(&mut table, &provider, stacked(&GOD_VS_TRASH, "3C"), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(round.state().envido_state, EnvidoState::Querido);
    assert_eq!(outcome.envido_points.as_tuple(), (0, 2));
    assert_eq!(outcome.points.as_tuple(), (1, 2));
}

#[test]
fn envido_comparison_skips_leading_team() {
    let mut table = Table::with_generated_names(2).unwrap();
    let provider = FnProvider(bidder(1, ActionCode::OfferEnvido, true));
    let hands = [
        ["12E", "11O", "10C"], // A1: 0
        ["7E", "3E", "1O"],    // B1: 30
        ["7C", "6C", "4O"],    // A2: 33
        ["6O", "5O", "3C"],    // B2: 31
    ];
    let mut round = Round::new(&mut table, &provider, stacked(&hands, "10B"), 1, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();

    assert_eq!(round.state().envido_bidder, Some(1));
    assert_eq!(outcome.envido_points.as_tuple(), (2, 0));
}

#[test]
fn bluffed_flor_pays_opponent() {
    let mut table = heads_up();
    let provider = FnProvider(bidder(0, ActionCode::Flor, true));
    let mut round =
        Round::new(&mut table, &provider, stacked(&GOD_VS_TRASH, "3C"), 0, PLAIN).unwrap();
    assert!(!round.dealt_flor(0));
    let outcome = round.play_round().unwrap();

    assert_eq!(round.state().flor_calls, vec![0]);
    assert_eq!(outcome.winner, Team::One);
    assert_eq!(outcome.points.as_tuple(), (1, 3));
}

#[test]
fn flor_answer_cancels_envido() {
    let mut table = heads_up();
    let hands = [["1E", "1B", "7E"], ["4B", "5B", "6B"]];
    let provider = FnProvider(move |state: &PlayerState, available: &[ActionCode]| {
        if available.contains(&ActionCode::Flor) && state.seat == 1 {
            ActionCode::Flor
        } else if state.seat == 0 && available.contains(&ActionCode::OfferEnvido) {
            ActionCode::OfferEnvido
        } else {
            ActionCode::PlayCard0
        }
    });
    let mut round = Round::new(&mut table, &provider, stacked(&hands, "3C"), 0, PLAIN).unwrap();
    assert!(round.dealt_flor(1));
    let outcome = round.play_round().unwrap();

    assert_eq!(round.state().envido_state, EnvidoState::Nada);
    assert_eq!(round.state().envido_bidder, None);
    assert_eq!(round.state().flor_calls, vec![1]);
    assert_eq!(outcome.envido_points.as_tuple(), (0, 0));
    assert_eq!(outcome.points.as_tuple(), (1, 3));
}

#[test]
fn unoffered_action_is_rejected() {
    let mut table = heads_up();
    let provider = FnProvider(|_: &PlayerState, _: &[ActionCode]| ActionCode::AcceptTruco);
    let mut round = Round::new(&mut table, &provider, Deck::seeded(5), 0, PLAIN).unwrap();
    match round.play_round() {
        Err(DomainError::InvalidActionSelected { action, available }) => {
            assert_eq!(action, ActionCode::AcceptTruco);
            assert!(available.contains(&ActionCode::PlayCard0));
        }
        other => panic!("expected InvalidActionSelected, got {other:?}"),
    }
}

#[test]
fn teammate_cards_only_when_enabled() {
    let mut table = Table::with_generated_names(2).unwrap();
    let provider = FnProvider(first_card(true));
    let shown = RoundOptions {
        show_teammate_cards: true,
        ..PLAIN
    };
    let round = Round::new(&mut table, &provider, Deck::seeded(9), 0, shown).unwrap();
    let state = round.get_player_state(0);
    let mate_cards = round.table().player(2).cards().to_vec();
    assert_eq!(
        state.teammate_cards,
        Some(vec![TeammateHand {
            seat: 2,
            cards: mate_cards
        }])
    );
    assert_eq!(state.team, Team::One);

    let mut table = Table::with_generated_names(2).unwrap();
    let round = Round::new(&mut table, &provider, Deck::seeded(9), 0, PLAIN).unwrap();
    assert_eq!(round.get_player_state(0).teammate_cards, None);
}

#[test]
fn round_info_and_pie() {
    let mut table = Table::with_generated_names(2).unwrap();
    let provider = FnProvider(first_card(true));
    let round = Round::new(&mut table, &provider, Deck::seeded(2), 3, PLAIN).unwrap();
    let info = round.round_info();
    assert_eq!(info.starting_seat, 3);
    assert_eq!(info.seat_count, 4);
    assert_eq!(info.muestra, round.muestra());
    assert_eq!(round.team_pie(Team::Two), 1);
    assert_eq!(round.team_pie(Team::One), 2);
}

#[test]
fn truco_responder_follows_options() {
    // only seat 3 accepts a raise
    let provider = FnProvider(|state: &PlayerState, available: &[ActionCode]| {
        if available.contains(&ActionCode::AcceptTruco) {
            if state.seat == 3 {
                ActionCode::AcceptTruco
            } else {
                ActionCode::RejectTruco
            }
        } else if state.seat == 0 && available.contains(&ActionCode::OfferTruco) {
            ActionCode::OfferTruco
        } else {
            ActionCode::PlayCard0
        }
    });

    let mut table = Table::with_generated_names(2).unwrap();
    let mut round = Round::new(&mut table, &provider, Deck::seeded(4), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();
    assert_eq!(outcome.resolution, Resolution::TrucoRejected);
    assert_eq!(outcome.winner, Team::One);

    let pie = RoundOptions {
        truco_responder: TrucoResponder::Pie,
        ..PLAIN
    };
    let mut table = Table::with_generated_names(2).unwrap();
    let mut round = Round::new(&mut table, &provider, Deck::seeded(4), 0, pie).unwrap();
    let outcome = round.play_round().unwrap();
    assert_eq!(outcome.resolution, Resolution::Tricks);
    assert_eq!(outcome.truco_state, TrucoState::Truco);
}

/// Own-turn offers seen by the provider, with the truco level at the time.
type Offers = Arc<Mutex<Vec<(Seat, TrucoState, Vec<ActionCode>)>>>;

fn recording<F>(choose: F) -> (Offers, impl Fn(&PlayerState, &[ActionCode]) -> ActionCode)
where
    F: Fn(&PlayerState, &[ActionCode]) -> ActionCode,
{
    let offers: Offers = Arc::default();
    let log = Arc::clone(&offers);
    let wrapped = move |state: &PlayerState, available: &[ActionCode]| {
        if available.iter().any(|a| a.card_index().is_some()) {
            log.lock().unwrap().push((
                state.seat,
                state.round_state.truco_state,
                available.to_vec(),
            ));
        }
        choose(state, available)
    };
    (offers, wrapped)
}

#[test]
fn bidding_team_is_not_offered_truco_after_accepted_raise() {
    let (offers, choose) = recording(bidder(0, ActionCode::OfferTruco, true));
    let provider = FnProvider(choose);
    let mut table = Table::with_generated_names(2).unwrap();
    let mut round = Round::new(&mut table, &provider, Deck::seeded(4), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();
    assert_eq!(outcome.truco_state, TrucoState::Truco);

    let offers = offers.lock().unwrap();
    let after_raise: Vec<_> = offers
        .iter()
        .filter(|(_, level, _)| *level == TrucoState::Truco)
        .collect();
    assert!(after_raise.iter().any(|(seat, _, _)| *seat == 0));
    assert!(after_raise.iter().any(|(seat, _, _)| *seat == 2));
    for (seat, _, available) in after_raise {
        let offered = available.contains(&ActionCode::OfferTruco);
        if Team::of_seat(*seat) == Team::One {
            assert!(!offered, "seat {seat} raised over its own team");
        } else {
            assert!(offered, "seat {seat} could not answer with a raise");
        }
    }
}

#[test]
fn nobody_is_offered_truco_at_vale4() {
    let base = first_card(true);
    let (offers, choose) = recording(move |state: &PlayerState, available: &[ActionCode]| {
        if available.contains(&ActionCode::OfferTruco) {
            ActionCode::OfferTruco
        } else {
            base(state, available)
        }
    });
    let provider = FnProvider(choose);
    let mut table = Table::with_generated_names(2).unwrap();
    let mut round = Round::new(&mut table, &provider, Deck::seeded(4), 0, PLAIN).unwrap();
    let outcome = round.play_round().unwrap();
    assert_eq!(outcome.truco_state, TrucoState::Vale4);

    let offers = offers.lock().unwrap();
    let at_vale4: Vec<_> = offers
        .iter()
        .filter(|(_, level, _)| *level == TrucoState::Vale4)
        .collect();
    // seat 2 raised to vale4; seat 2 then plays and seat 3 closes the trick
    assert!(at_vale4.iter().any(|(seat, _, _)| *seat == 2));
    assert!(at_vale4.iter().any(|(seat, _, _)| *seat == 3));
    for (seat, _, available) in at_vale4 {
        assert!(
            !available.contains(&ActionCode::OfferTruco),
            "seat {seat} offered a raise past vale4"
        );
    }
}
