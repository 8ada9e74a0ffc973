//! Shared types for the simulator.

use clap::ValueEnum;
use truco::TrucoResponder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    Random,
    Heuristic,
}

impl AgentKind {
    /// Name in the agent registry.
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Heuristic => "heuristic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResponderKind {
    NextOpponent,
    Pie,
}

impl From<ResponderKind> for TrucoResponder {
    fn from(kind: ResponderKind) -> Self {
        match kind {
            ResponderKind::NextOpponent => TrucoResponder::NextOpponent,
            ResponderKind::Pie => TrucoResponder::Pie,
        }
    }
}
