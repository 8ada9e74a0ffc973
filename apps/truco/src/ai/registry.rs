//! How to register an agent
//!
//! 1) Implement `Agent` for your type in its module.
//! 2) Add an `AgentFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same config ⇒ same behavior.

use super::config::AgentConfig;
use super::heuristic::Heuristic;
use super::random::RandomAgent;
use super::trait_def::Agent;

/// Factory definition for constructing agents.
pub struct AgentFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AgentConfig) -> Box<dyn Agent>,
}

static AGENT_FACTORIES: &[AgentFactory] = &[
    AgentFactory {
        name: RandomAgent::NAME,
        version: RandomAgent::VERSION,
        make: make_random,
    },
    AgentFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
];

pub fn registered_agents() -> &'static [AgentFactory] {
    AGENT_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AgentFactory> {
    registered_agents()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

/// Build a registered agent, `None` for unknown names.
pub fn create_agent(name: &str, config: &AgentConfig) -> Option<Box<dyn Agent>> {
    by_name(name).map(|factory| (factory.make)(config))
}

fn make_random(config: &AgentConfig) -> Box<dyn Agent> {
    Box::new(RandomAgent::new(config.seed()))
}

fn make_heuristic(config: &AgentConfig) -> Box<dyn Agent> {
    Box::new(Heuristic::from_config(config))
}
