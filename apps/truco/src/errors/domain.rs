//! Domain-level error type used by the engine and its collaborators.
//!
//! Every variant is fatal for the game session that raised it: they signal a
//! broken collaborator (a provider answering outside the offered set), a
//! malformed construction, or an engine invariant violation. Truco rejection
//! is not an error and never travels through this type.

use thiserror::Error;

use crate::domain::actions::ActionCode;
use crate::domain::Card;
use crate::errors::error_code::ErrorCode;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Card constructed with a number outside the Spanish 40-card deck.
    #[error("invalid card: {0}")]
    InvalidCard(String),
    /// Card token could not be parsed.
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("cannot draw {requested} cards, only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("card index {index} out of bounds for hand of {hand_size}")]
    InvalidCardIndex { index: usize, hand_size: usize },
    #[error("hand is empty")]
    EmptyHand,
    #[error("hand is full")]
    HandFull,
    #[error("card {0} already in hand")]
    DuplicateCard(Card),
    /// The provider answered with a code that was not offered.
    #[error("invalid action selected by provider: {action:?}, valid: {available:?}")]
    InvalidActionSelected {
        action: ActionCode,
        available: Vec<ActionCode>,
    },
    #[error("cannot advance truco state from vale4")]
    CannotAdvanceTrucoState,
    #[error("invalid teams: {0}")]
    InvalidTeams(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The provider failed before answering.
    #[error("provider error: {0}")]
    Provider(String),
}

impl DomainError {
    pub fn invalid_teams(detail: impl Into<String>) -> Self {
        Self::InvalidTeams(detail.into())
    }

    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig(detail.into())
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCard(_) => ErrorCode::InvalidCard,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
            DomainError::InsufficientCards { .. } => ErrorCode::InsufficientCards,
            DomainError::InvalidCardIndex { .. } => ErrorCode::InvalidCardIndex,
            DomainError::EmptyHand => ErrorCode::EmptyHand,
            DomainError::HandFull => ErrorCode::HandFull,
            DomainError::DuplicateCard(_) => ErrorCode::DuplicateCard,
            DomainError::InvalidActionSelected { .. } => ErrorCode::InvalidActionSelected,
            DomainError::CannotAdvanceTrucoState => ErrorCode::CannotAdvanceTrucoState,
            DomainError::InvalidTeams(_) => ErrorCode::InvalidTeams,
            DomainError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            DomainError::Provider(_) => ErrorCode::ProviderFailure,
        }
    }
}
