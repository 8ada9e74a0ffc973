//! Random agent: picks uniformly among the offered codes.
//!
//! Baseline opponent for training runs and a smoke-test driver for the
//! engine. Seeded agents are reproducible.

use rand::prelude::*;

use super::observation::Observation;
use super::trait_def::{Agent, AiError};

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible choices, `None` for entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn select_action(
        &mut self,
        _observation: &Observation,
        available: &[u8],
    ) -> Result<u8, AiError> {
        available.choose(&mut self.rng).copied().ok_or(AiError::NoActions)
    }
}
