//! Rule-of-thumb agent.
//!
//! Plays its strongest card, raises truco holding a mata or pieza, bids or
//! accepts envido from a threshold, and only declares a flor it holds.
//! Needs an attached round to see the muestra; without one it ranks cards
//! as if no piezas existed.

use super::config::AgentConfig;
use super::observation::Observation;
use super::trait_def::{Agent, AiError};
use crate::domain::actions::ActionCode;
use crate::domain::cards_logic::{base_value, card_value};
use crate::domain::cards_types::{Card, Suit};
use crate::domain::envido::{calculate_envido, has_flor};

/// Lowest card strength (the 7 of oro) that makes the agent raise.
const RAISE_STRENGTH: u8 = 10;
const DEFAULT_ENVIDO_THRESHOLD: u8 = 27;
/// Margin over the threshold required to open envido rather than accept it.
const ENVIDO_OPEN_MARGIN: u8 = 3;

pub struct Heuristic {
    envido_threshold: u8,
}

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(envido_threshold: u8) -> Self {
        Self { envido_threshold }
    }

    /// Reads `envido_threshold` from the custom fields.
    pub fn from_config(config: &AgentConfig) -> Self {
        let threshold = config
            .get_custom("envido_threshold")
            .and_then(|v| v.as_u64())
            .and_then(|v| u8::try_from(v).ok())
            .unwrap_or(DEFAULT_ENVIDO_THRESHOLD);
        Self::new(threshold)
    }

    fn muestra(observation: &Observation) -> Option<Card> {
        let suit = Suit::from_index(observation.muestra_suit)?;
        Card::new(observation.muestra_number, suit).ok()
    }

    fn hand(observation: &Observation) -> Vec<Card> {
        observation
            .hand_numbers
            .iter()
            .zip(observation.hand_suits.iter())
            .filter_map(|(&n, &s)| {
                let suit = Suit::from_index(u8::try_from(s).ok()?)?;
                Card::new(u8::try_from(n).ok()?, suit).ok()
            })
            .collect()
    }

    fn strength(card: Card, muestra: Option<Card>) -> u8 {
        match muestra {
            Some(m) => card_value(card, m),
            None => base_value(card),
        }
    }

    fn choose(&self, observation: &Observation, available: &[ActionCode]) -> Option<ActionCode> {
        let offered = |a: ActionCode| available.contains(&a);
        let muestra = Self::muestra(observation);
        let hand = Self::hand(observation);
        let best = hand
            .iter()
            .enumerate()
            .max_by_key(|&(_, &c)| Self::strength(c, muestra));
        let envido = observation
            .dealt_envido
            .or_else(|| muestra.map(|m| calculate_envido(&hand, m)));
        let real_flor = muestra.is_some_and(|m| has_flor(&hand, m));

        if offered(ActionCode::Flor) && real_flor {
            return Some(ActionCode::Flor);
        }
        if offered(ActionCode::AcceptEnvido) {
            let accept = envido.is_some_and(|v| v >= self.envido_threshold);
            return Some(if accept {
                ActionCode::AcceptEnvido
            } else {
                ActionCode::RejectEnvido
            });
        }
        if offered(ActionCode::AcceptTruco) {
            let strong = best.is_some_and(|(_, &c)| Self::strength(c, muestra) >= RAISE_STRENGTH);
            return Some(if strong {
                ActionCode::AcceptTruco
            } else {
                ActionCode::RejectTruco
            });
        }
        if offered(ActionCode::OfferEnvido)
            && envido.is_some_and(|v| v >= self.envido_threshold.saturating_add(ENVIDO_OPEN_MARGIN))
        {
            return Some(ActionCode::OfferEnvido);
        }
        if let Some((idx, &card)) = best {
            if offered(ActionCode::OfferTruco) && Self::strength(card, muestra) >= RAISE_STRENGTH {
                return Some(ActionCode::OfferTruco);
            }
            if let Some(play) = ActionCode::play_card(idx).filter(|&a| offered(a)) {
                return Some(play);
            }
        }
        available.first().copied()
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(DEFAULT_ENVIDO_THRESHOLD)
    }
}

impl Agent for Heuristic {
    fn select_action(&mut self, observation: &Observation, available: &[u8]) -> Result<u8, AiError> {
        let codes: Vec<ActionCode> = available
            .iter()
            .map(|&code| ActionCode::try_from(code).map_err(AiError::InvalidMove))
            .collect::<Result<_, _>>()?;
        self.choose(observation, &codes)
            .map(ActionCode::code)
            .ok_or(AiError::NoActions)
    }
}
