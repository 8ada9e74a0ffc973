//! Adapter that lets two agents drive a game as its action provider.

use std::sync::{Mutex, MutexGuard};

use tracing::{trace, warn};

use super::observation::Observation;
use super::trait_def::{ActionProvider, Agent, AiError, AttachRound, TrajectoryStep};
use crate::domain::actions::ActionCode;
use crate::domain::player::Player;
use crate::domain::state::{PlayerState, RoundInfo};
use crate::domain::table::Team;

/// The learner answers for one team, the opponent for the other. Learner
/// decisions are recorded with a zero reward until the episode ends.
pub struct AgentProvider {
    learner: Mutex<Box<dyn Agent>>,
    opponent: Mutex<Box<dyn Agent>>,
    learner_team: Team,
    round: Mutex<Option<RoundInfo>>,
    trajectory: Mutex<Vec<TrajectoryStep>>,
}

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, AiError> {
    m.lock()
        .map_err(|e| AiError::Internal(format!("lock poisoned: {e}")))
}

impl AgentProvider {
    pub fn new(learner: Box<dyn Agent>, opponent: Box<dyn Agent>, learner_team: Team) -> Self {
        Self {
            learner: Mutex::new(learner),
            opponent: Mutex::new(opponent),
            learner_team,
            round: Mutex::new(None),
            trajectory: Mutex::new(Vec::new()),
        }
    }

    pub fn learner_team(&self) -> Team {
        self.learner_team
    }

    /// Copy of the learner's decisions so far.
    pub fn trajectory(&self) -> Result<Vec<TrajectoryStep>, AiError> {
        Ok(lock(&self.trajectory)?.clone())
    }

    pub fn reset_trajectory(&self) -> Result<(), AiError> {
        lock(&self.trajectory)?.clear();
        Ok(())
    }

    /// Hand the recorded trajectory to the learner, then reset both agents
    /// and the trajectory.
    pub fn end_episode(&self) -> Result<(), AiError> {
        let steps = std::mem::take(&mut *lock(&self.trajectory)?);
        let mut learner = lock(&self.learner)?;
        learner.update(&steps);
        learner.reset();
        lock(&self.opponent)?.reset();
        Ok(())
    }
}

impl ActionProvider for AgentProvider {
    fn choose_action(
        &self,
        player: &Player,
        state: &PlayerState,
        available: &[ActionCode],
    ) -> Result<ActionCode, AiError> {
        let round = *lock(&self.round)?;
        let observation = Observation::build(state, round.as_ref());
        let codes: Vec<u8> = available.iter().map(|a| a.code()).collect();

        let code = if state.team == self.learner_team {
            let code = lock(&self.learner)?.select_action(&observation, &codes)?;
            lock(&self.trajectory)?.push(TrajectoryStep {
                state_key: observation.state_key(),
                action: code,
                reward: 0.0,
            });
            code
        } else {
            lock(&self.opponent)?.select_action(&observation, &codes)?
        };
        trace!(player = player.name(), code, "Agent decided");

        ActionCode::try_from(code).map_err(AiError::InvalidMove)
    }

    fn round_observer(&self) -> Option<&dyn AttachRound> {
        Some(self)
    }
}

impl AttachRound for AgentProvider {
    fn attach_round(&self, round: &RoundInfo) {
        // The slot is overwritten whole, so a poisoned value is safe to replace.
        let mut slot = self.round.lock().unwrap_or_else(|poisoned| {
            warn!(
                starting_seat = round.starting_seat,
                "Round slot lock poisoned; replacing stale round info"
            );
            self.round.clear_poison();
            poisoned.into_inner()
        });
        *slot = Some(*round);
    }
}
