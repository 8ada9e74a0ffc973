//! In-memory match runner.
//!
//! Each match seats generated players, lets a learner agent play team one
//! against an opponent agent on team two, and plays to the target score.

use std::sync::Arc;

use tracing::debug;
use truco::ai::{create_agent, Agent, AgentConfig, AgentProvider};
use truco::domain::{derive_agent_seed, Resolution, RoundSummary};
use truco::{DomainError, Game, GameConfig, Table, Team, TeamPoints};

use crate::types::AgentKind;

/// What a finished match leaves behind.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub winner: Team,
    pub scores: TeamPoints,
    pub rounds: Vec<RoundSummary>,
    /// Decisions the learner made over the match.
    pub learner_steps: usize,
}

impl MatchResult {
    pub fn truco_rejections(&self) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.resolution == Resolution::TrucoRejected)
            .count()
    }
}

pub struct Simulator {
    config: GameConfig,
    agent: AgentKind,
    opponent: AgentKind,
}

impl Simulator {
    pub fn new(config: GameConfig, agent: AgentKind, opponent: AgentKind) -> Self {
        Self {
            config,
            agent,
            opponent,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one match whose decks and agents all derive from `seed`.
    pub fn simulate_match(&self, seed: u64) -> Result<MatchResult, DomainError> {
        let table = Table::with_generated_names(self.config.team_size)?;
        let learner = build_agent(self.agent, derive_agent_seed(seed, Team::One))?;
        let opponent = build_agent(self.opponent, derive_agent_seed(seed, Team::Two))?;
        let provider = Arc::new(AgentProvider::new(learner, opponent, Team::One));

        let mut game = Game::seeded(
            table,
            Box::new(Arc::clone(&provider)),
            self.config.round_options(),
            seed,
        );
        let winner = game.play_game(self.config.target_points)?;

        let learner_steps = provider.trajectory()?.len();
        provider.end_episode()?;
        debug!(
            seed,
            %winner,
            rounds = game.rounds_played(),
            learner_steps,
            "Match finished"
        );

        Ok(MatchResult {
            winner,
            scores: game.scores(),
            rounds: game.history().to_vec(),
            learner_steps,
        })
    }
}

fn build_agent(kind: AgentKind, seed: u64) -> Result<Box<dyn Agent>, DomainError> {
    create_agent(kind.name(), &AgentConfig::with_seed(seed))
        .ok_or_else(|| DomainError::invalid_config(format!("unknown agent: {}", kind.name())))
}
