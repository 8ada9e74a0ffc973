//! A match: rounds until one team reaches the target score.

use serde::Serialize;
use tracing::{debug, info};

use crate::ai::ActionProvider;
use crate::domain::dealing::Deck;
use crate::domain::round::{Resolution, Round, RoundOptions, RoundOutcome};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::TrucoState;
use crate::domain::table::{Seat, Table, Team, TeamPoints};
use crate::errors::domain::DomainError;

/// Builds the deck for each new round.
pub type DeckFactory = Box<dyn FnMut() -> Deck + Send>;

/// Deck factory dealing round `n` from `derive_dealing_seed(seed, n)`.
pub fn seeded_decks(seed: u64) -> DeckFactory {
    let mut round = 0u64;
    Box::new(move || {
        let deck = Deck::seeded(derive_dealing_seed(seed, round));
        round += 1;
        deck
    })
}

/// What the game remembers about a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub starting_seat: Seat,
    pub winner: Team,
    pub points: TeamPoints,
    pub truco_state: TrucoState,
    pub resolution: Resolution,
}

pub struct Game {
    table: Table,
    provider: Box<dyn ActionProvider>,
    scores: TeamPoints,
    next_starter: Seat,
    options: RoundOptions,
    deck_factory: DeckFactory,
    history: Vec<RoundSummary>,
}

impl Game {
    /// Game dealing from entropy-seeded decks.
    pub fn new(table: Table, provider: Box<dyn ActionProvider>, options: RoundOptions) -> Self {
        Self::with_deck_factory(table, provider, options, Box::new(Deck::from_entropy))
    }

    /// Game whose decks come from `deck_factory`, one call per round.
    pub fn with_deck_factory(
        table: Table,
        provider: Box<dyn ActionProvider>,
        options: RoundOptions,
        deck_factory: DeckFactory,
    ) -> Self {
        Self {
            table,
            provider,
            scores: TeamPoints::default(),
            next_starter: 0,
            options,
            deck_factory,
            history: Vec::new(),
        }
    }

    /// Game whose round decks derive from one seed.
    pub fn seeded(
        table: Table,
        provider: Box<dyn ActionProvider>,
        options: RoundOptions,
        seed: u64,
    ) -> Self {
        Self::with_deck_factory(table, provider, options, seeded_decks(seed))
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn options(&self) -> RoundOptions {
        self.options
    }

    pub fn scores(&self) -> TeamPoints {
        self.scores
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    /// Seat that will lead the next round.
    pub fn next_round_starter(&self) -> Seat {
        self.next_starter
    }

    /// Play one round from the current starter and add its points.
    pub fn play_round(&mut self) -> Result<RoundOutcome, DomainError> {
        let starting_seat = self.next_starter;
        let deck = (self.deck_factory)();
        let mut round = Round::new(
            &mut self.table,
            self.provider.as_ref(),
            deck,
            starting_seat,
            self.options,
        )?;
        if let Some(observer) = self.provider.round_observer() {
            observer.attach_round(&round.round_info());
        }
        let outcome = round.play_round()?;

        self.scores.add_all(outcome.points);
        self.next_starter = (starting_seat + 1) % self.table.seat_count();
        self.history.push(RoundSummary {
            starting_seat,
            winner: outcome.winner,
            points: outcome.points,
            truco_state: outcome.truco_state,
            resolution: outcome.resolution,
        });
        debug!(
            round = self.history.len(),
            team1 = self.scores.team1,
            team2 = self.scores.team2,
            "Scores updated"
        );
        Ok(outcome)
    }

    /// Play rounds until a team reaches `target_points`; team one wins when
    /// both cross in the same round.
    pub fn play_game(&mut self, target_points: u32) -> Result<Team, DomainError> {
        if target_points == 0 {
            return Err(DomainError::invalid_config("target points must be positive"));
        }
        while self.scores.max() < target_points {
            self.play_round()?;
        }
        let winner = if self.scores.team1 >= target_points {
            Team::One
        } else {
            Team::Two
        };
        info!(
            %winner,
            team1 = self.scores.team1,
            team2 = self.scores.team2,
            rounds = self.rounds_played(),
            "Game completed"
        );
        Ok(winner)
    }
}
