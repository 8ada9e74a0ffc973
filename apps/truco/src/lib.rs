//! Truco round engine.
//!
//! `domain` holds cards, seating, and the round and game state machines;
//! `ai` holds the action-provider seam and baseline agents; `config` loads
//! match settings.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use ai::{ActionProvider, AttachRound};
pub use config::GameConfig;
pub use domain::{
    ActionCode, Card, Deck, Game, Player, PlayerState, Round, RoundOptions, RoundOutcome,
    RoundState, Suit, Table, Team, TeamPoints, TrucoResponder, TrucoState,
};
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    truco_test_support::logging::init();
}
