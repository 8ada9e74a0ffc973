//! Provider and agent trait definitions.

use std::fmt;
use std::sync::Arc;

use crate::domain::actions::ActionCode;
use crate::domain::player::Player;
use crate::domain::state::{PlayerState, RoundInfo};
use crate::errors::domain::DomainError;

/// Errors that can occur while a provider or agent is deciding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Nothing to choose from
    NoActions,
    /// Agent encountered an internal error
    Internal(String),
    /// Agent produced a code it was not offered
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::NoActions => write!(f, "no legal actions to choose from"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::Provider(err.to_string())
    }
}

/// Whoever answers for the players at the table.
///
/// The round calls `choose_action` for every decision and checks that the
/// returned code is one of `available`. Providers only ever see snapshots.
pub trait ActionProvider: Send + Sync {
    /// Pick one of `available` for `player`.
    fn choose_action(
        &self,
        player: &Player,
        state: &PlayerState,
        available: &[ActionCode],
    ) -> Result<ActionCode, AiError>;

    /// Providers that want the round's fixed facts return themselves here.
    fn round_observer(&self) -> Option<&dyn AttachRound> {
        None
    }
}

/// Optional capability: be told about each round before it is played.
pub trait AttachRound {
    fn attach_round(&self, round: &RoundInfo);
}

impl<T: ActionProvider + ?Sized> ActionProvider for Arc<T> {
    fn choose_action(
        &self,
        player: &Player,
        state: &PlayerState,
        available: &[ActionCode],
    ) -> Result<ActionCode, AiError> {
        (**self).choose_action(player, state, available)
    }

    fn round_observer(&self) -> Option<&dyn AttachRound> {
        (**self).round_observer()
    }
}

/// One decision an agent made, for whatever learning happens outside.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrajectoryStep {
    pub state_key: String,
    pub action: u8,
    pub reward: f64,
}

/// Decision-making contract for trainable agents.
///
/// Agents see a compact observation and raw action codes; learning
/// algorithms plug in behind `update`.
pub trait Agent: Send {
    fn select_action(
        &mut self,
        observation: &super::observation::Observation,
        available: &[u8],
    ) -> Result<u8, AiError>;

    /// Feed back a finished trajectory. Default agents ignore it.
    fn update(&mut self, _trajectory: &[TrajectoryStep]) {}

    /// Forget per-episode state.
    fn reset(&mut self) {}
}
