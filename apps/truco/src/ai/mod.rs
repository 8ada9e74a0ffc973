//! Action providers and agents.
//!
//! This module provides:
//! - `ActionProvider`: the engine's only collaborator for decisions
//! - `AttachRound`: optional capability to learn each round's muestra
//! - `Agent`: observation-level contract for trainable agents
//! - `RandomAgent` and `Heuristic` baselines, plus a name registry
//! - `AgentProvider`: seats two agents at the table

pub mod config;
mod heuristic;
pub mod observation;
mod provider;
mod random;
pub mod registry;
mod trait_def;

pub use config::AgentConfig;
pub use heuristic::Heuristic;
pub use observation::Observation;
pub use provider::AgentProvider;
pub use random::RandomAgent;
pub use registry::{by_name, create_agent, registered_agents, AgentFactory};
pub use trait_def::{ActionProvider, Agent, AiError, AttachRound, TrajectoryStep};
