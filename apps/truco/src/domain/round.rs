//! The round engine: deal, drive tricks, resolve bids, settle points.
//!
//! A round owns a fresh deck and mutates the seated players' hands through
//! the table. Every decision goes to the action provider, which only sees a
//! `PlayerState` snapshot. Truco rejection ends the round through
//! `TurnOutcome::RoundDecided` rather than an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, trace};

use crate::ai::ActionProvider;
use crate::domain::actions::ActionCode;
use crate::domain::cards_types::Card;
use crate::domain::dealing::Deck;
use crate::domain::envido::{calculate_envido, has_flor};
use crate::domain::rules::{
    TrucoResponder, CARDS_PER_PLAYER, ENVIDO_ACCEPTED_POINTS, ENVIDO_REJECTED_POINTS,
};
use crate::domain::scoring::hand_points;
use crate::domain::state::{
    EnvidoState, PlayerState, RoundInfo, RoundState, TeammateHand, TrickRecord, TrucoState,
};
use crate::domain::table::{Seat, Table, Team, TeamPoints};
use crate::domain::tricks::{round_winner, TrickTracker};
use crate::errors::domain::DomainError;

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    Tricks,
    TrucoRejected,
}

/// Result of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: Team,
    pub resolution: Resolution,
    pub points: TeamPoints,
    pub truco_state: TrucoState,
    pub envido_points: TeamPoints,
    pub tricks: Vec<TrickRecord>,
}

/// Per-round table options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOptions {
    /// Include teammates' hands in every `PlayerState`.
    pub show_teammate_cards: bool,
    pub truco_responder: TrucoResponder,
}

/// What a player's turn ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnOutcome {
    Played(Card),
    RoundDecided(Team),
}

pub struct Round<'a> {
    table: &'a mut Table,
    provider: &'a dyn ActionProvider,
    deck: Deck,
    muestra: Card,
    starting_seat: Seat,
    options: RoundOptions,
    state: RoundState,
}

impl<'a> Round<'a> {
    /// Deal three cards to every seat in seating order, snapshot the hands,
    /// then turn up the muestra.
    pub fn new(
        table: &'a mut Table,
        provider: &'a dyn ActionProvider,
        mut deck: Deck,
        starting_seat: Seat,
        options: RoundOptions,
    ) -> Result<Self, DomainError> {
        if starting_seat >= table.seat_count() {
            return Err(DomainError::invalid_config(format!(
                "starting seat {starting_seat} out of range for {} seats",
                table.seat_count()
            )));
        }

        let mut initial_hands = BTreeMap::new();
        for seat in 0..table.seat_count() {
            let cards = deck.draw(CARDS_PER_PLAYER)?;
            initial_hands.insert(seat, cards.clone());
            table.player_mut(seat).deal(cards);
        }
        let muestra = deck.draw_one()?;
        debug!(%muestra, starting_seat, remaining = deck.remaining(), "Dealt round");

        Ok(Self {
            table,
            provider,
            deck,
            muestra,
            starting_seat,
            options,
            state: RoundState::new(initial_hands),
        })
    }

    pub fn muestra(&self) -> Card {
        self.muestra
    }

    pub fn starting_seat(&self) -> Seat {
        self.starting_seat
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn table(&self) -> &Table {
        self.table
    }

    pub fn options(&self) -> RoundOptions {
        self.options
    }

    pub fn remaining_in_deck(&self) -> usize {
        self.deck.remaining()
    }

    pub fn round_info(&self) -> RoundInfo {
        RoundInfo {
            muestra: self.muestra,
            starting_seat: self.starting_seat,
            seat_count: self.table.seat_count(),
        }
    }

    /// Last player of `team` in this round's rotation.
    pub fn team_pie(&self, team: Team) -> Seat {
        self.table.team_pie(team, self.starting_seat)
    }

    /// Snapshot handed to the provider when `seat` acts.
    pub fn get_player_state(&self, seat: Seat) -> PlayerState {
        let teammate_cards = self.options.show_teammate_cards.then(|| {
            self.table
                .teammates(seat)
                .into_iter()
                .map(|mate| TeammateHand {
                    seat: mate,
                    cards: self.table.player(mate).cards().to_vec(),
                })
                .collect()
        });
        PlayerState {
            seat,
            team: Team::of_seat(seat),
            round_state: self.state.clone(),
            player_cards: self.table.player(seat).cards().to_vec(),
            teammate_cards,
        }
    }

    /// Legal actions for `seat` on its own turn.
    pub fn get_available_actions(&self, seat: Seat) -> Vec<ActionCode> {
        let player = self.table.player(seat);
        let mut actions: Vec<ActionCode> = (0..player.cards().len())
            .filter_map(ActionCode::play_card)
            .collect();
        if self.can_raise_truco(seat) {
            actions.push(ActionCode::OfferTruco);
        }
        if self.can_call_flor(seat) {
            actions.push(ActionCode::Flor);
        }
        if player.has_full_hand()
            && self.state.flor_calls.is_empty()
            && self.state.envido_state == EnvidoState::Nada
        {
            actions.push(ActionCode::OfferEnvido);
        }
        actions
    }

    fn can_raise_truco(&self, seat: Seat) -> bool {
        self.state.truco_state != TrucoState::Vale4
            && self
                .state
                .last_truco_bidder
                .is_none_or(|bidder| Team::of_seat(bidder) != Team::of_seat(seat))
    }

    fn can_call_flor(&self, seat: Seat) -> bool {
        self.table.player(seat).has_full_hand() && !self.state.has_called_flor(seat)
    }

    /// Play tricks until the round is decided and settle its points.
    pub fn play_round(&mut self) -> Result<RoundOutcome, DomainError> {
        let hand_team = Team::of_seat(self.starting_seat);
        let mut leader = self.starting_seat;
        let mut results: Vec<Option<Team>> = Vec::with_capacity(CARDS_PER_PLAYER);

        for trick_no in 0..CARDS_PER_PLAYER {
            let order: Vec<Seat> = self.table.rotation_from(leader).collect();
            let mut tracker = TrickTracker::new();
            let mut plays = Vec::with_capacity(order.len());

            for seat in order {
                match self.handle_player_turn(seat)? {
                    TurnOutcome::Played(card) => {
                        trace!(trick_no, seat, %card, "Card played");
                        tracker.observe(seat, card, self.muestra);
                        self.state.cards_played_this_round.insert(seat, card);
                        plays.push((seat, card));
                    }
                    TurnOutcome::RoundDecided(team) => {
                        return Ok(self.settle(team, Resolution::TrucoRejected));
                    }
                }
            }

            let winner = tracker.winner();
            debug!(trick_no, winner = ?winner, "Trick complete");
            self.state.tricks.push(TrickRecord { plays, winner });
            results.push(winner.map(Team::of_seat));
            if let Some(seat) = winner {
                leader = seat;
            }
            if let Some(team) = round_winner(&results, hand_team) {
                return Ok(self.settle(team, Resolution::Tricks));
            }
        }

        Ok(self.settle(hand_team, Resolution::Tricks))
    }

    fn settle(&self, winner: Team, resolution: Resolution) -> RoundOutcome {
        let points = hand_points(&self.state, winner, self.muestra);
        info!(
            %winner,
            resolution = ?resolution,
            truco = ?self.state.truco_state,
            team1 = points.team1,
            team2 = points.team2,
            "Round settled"
        );
        RoundOutcome {
            winner,
            resolution,
            points,
            truco_state: self.state.truco_state,
            envido_points: self.state.envido_points,
            tricks: self.state.tricks.clone(),
        }
    }

    /// Ask `seat` until it plays a card. Bids are resolved in place and the
    /// same seat is asked again.
    fn handle_player_turn(&mut self, seat: Seat) -> Result<TurnOutcome, DomainError> {
        loop {
            let available = self.get_available_actions(seat);
            let action = self.request_action(seat, &available)?;

            if let Some(index) = action.card_index() {
                let card = self.table.player_mut(seat).play_card(index)?;
                return Ok(TurnOutcome::Played(card));
            }

            match action {
                ActionCode::OfferTruco => {
                    if let Some(team) = self.handle_truco_bid(seat)? {
                        return Ok(TurnOutcome::RoundDecided(team));
                    }
                }
                ActionCode::OfferEnvido => self.handle_envido_bid(seat)?,
                ActionCode::Flor => {
                    debug!(seat, "Flor called");
                    self.state.flor_calls.push(seat);
                }
                other => {
                    error!(seat, action = %other, "Response code on own turn");
                    return Err(DomainError::InvalidActionSelected {
                        action: other,
                        available,
                    })
                }
            }
        }
    }

    /// Ask the provider for `seat` and check the answer was offered.
    fn request_action(
        &self,
        seat: Seat,
        available: &[ActionCode],
    ) -> Result<ActionCode, DomainError> {
        let state = self.get_player_state(seat);
        let player = self.table.player(seat);
        let action = self.provider.choose_action(player, &state, available)?;
        if !available.contains(&action) {
            error!(seat, %action, ?available, "Action not offered");
            return Err(DomainError::InvalidActionSelected {
                action,
                available: available.to_vec(),
            });
        }
        trace!(seat, player = player.name(), %action, "Action chosen");
        Ok(action)
    }

    /// Returns the bidder's team when the raise is rejected.
    fn handle_truco_bid(&mut self, bidder: Seat) -> Result<Option<Team>, DomainError> {
        let proposed = self.state.truco_state.next()?;
        self.state.last_truco_bidder = Some(bidder);
        let responder = self.truco_responder(bidder);
        let answer = self.request_action(
            responder,
            &[ActionCode::AcceptTruco, ActionCode::RejectTruco],
        )?;

        if answer == ActionCode::AcceptTruco {
            debug!(bidder, responder, state = ?proposed, "Truco accepted");
            self.state.truco_state = proposed;
            Ok(None)
        } else {
            debug!(bidder, responder, state = ?proposed, "Truco rejected");
            Ok(Some(Team::of_seat(bidder)))
        }
    }

    fn truco_responder(&self, bidder: Seat) -> Seat {
        match self.options.truco_responder {
            TrucoResponder::NextOpponent => self.table.next_opponent(bidder),
            TrucoResponder::Pie => self.team_pie(Team::of_seat(bidder).opponent()),
        }
    }

    fn handle_envido_bid(&mut self, bidder: Seat) -> Result<(), DomainError> {
        self.state.envido_state = EnvidoState::Envido;
        self.state.envido_bidder = Some(bidder);

        let responder = self.table.next_seat(bidder);
        let mut options = vec![ActionCode::AcceptEnvido, ActionCode::RejectEnvido];
        if self.can_call_flor(responder) {
            options.push(ActionCode::Flor);
        }

        match self.request_action(responder, &options)? {
            ActionCode::AcceptEnvido => {
                self.state.envido_state = EnvidoState::Querido;
                self.resolve_envido_comparison();
            }
            ActionCode::Flor => {
                debug!(bidder, responder, "Envido answered with flor");
                self.state.envido_state = EnvidoState::Nada;
                self.state.envido_bidder = None;
                self.state.flor_calls.push(responder);
            }
            _ => {
                debug!(bidder, responder, "Envido rejected");
                self.state.envido_state = EnvidoState::NoQuiero;
                self.state
                    .envido_points
                    .add(Team::of_seat(bidder), ENVIDO_REJECTED_POINTS);
            }
        }
        Ok(())
    }

    /// Compare envido values in first-trick order. Players whose team
    /// already leads stay silent; earlier players keep ties.
    fn resolve_envido_comparison(&mut self) {
        let mut best: Option<(Team, u8)> = None;
        for seat in self.table.rotation_from(self.starting_seat) {
            let team = Team::of_seat(seat);
            if matches!(best, Some((leading, _)) if leading == team) {
                continue;
            }
            let value = calculate_envido(self.state.initial_hand(seat), self.muestra);
            trace!(seat, value, "Envido declared");
            match best {
                Some((_, top)) if value <= top => {}
                _ => best = Some((team, value)),
            }
        }
        if let Some((team, value)) = best {
            debug!(%team, value, "Envido won");
            self.state.envido_points.add(team, ENVIDO_ACCEPTED_POINTS);
        }
    }

    /// Whether `seat` was dealt a real flor.
    pub fn dealt_flor(&self, seat: Seat) -> bool {
        has_flor(self.state.initial_hand(seat), self.muestra)
    }
}
