//! Domain layer: cards, seating, and the round and game engines.

pub mod actions;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod envido;
pub mod game;
pub mod player;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod table;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_props_envido;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_round;

// Re-exports for ergonomics
pub use actions::ActionCode;
pub use cards_logic::{base_value, card_beats, card_value, is_pieza};
pub use cards_types::{full_deck, Card, Suit};
pub use dealing::Deck;
pub use envido::{calculate_envido, has_flor};
pub use game::{seeded_decks, DeckFactory, Game, RoundSummary};
pub use player::Player;
pub use round::{Resolution, Round, RoundOptions, RoundOutcome};
pub use rules::TrucoResponder;
pub use seed_derivation::{derive_agent_seed, derive_dealing_seed, derive_match_seed};
pub use state::{EnvidoState, PlayerState, RoundInfo, RoundState, TrickRecord, TrucoState};
pub use table::{Seat, Table, Team, TeamPoints};
