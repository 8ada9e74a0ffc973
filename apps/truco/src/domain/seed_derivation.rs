//! Seed derivation for reproducible matches.
//!
//! One base seed fans out into a seed per match, per round deck and per
//! agent. Each derivation mixes its parent seed with a context salt before
//! adding the context index, so adjacent parent seeds (match `n` and `n + 1`,
//! or a learner and opponent of the same match) land on unrelated streams.

use crate::domain::table::Team;

const MATCH_SALT: u64 = 0x6d61_7463_6800_0000;
const DEALING_SALT: u64 = 0x6465_616c_0000_0000;
const AGENT_SALT: u64 = 0x6167_656e_7400_0000;

const ROUND_STRIDE: u64 = 1_000_000;
const DEALING_OFFSET: u64 = 2;
const TEAM_STRIDE: u64 = 100;
const AGENT_OFFSET: u64 = 1;

/// SplitMix64 finaliser: spreads nearby inputs across the whole `u64` range.
fn mix(value: u64) -> u64 {
    let mut z = value.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Derive the seed of one match in a simulation run.
///
/// # Arguments
/// * `base_seed` - Seed of the whole run
/// * `match_no` - Match number within the run
///
/// # Returns
/// A seed for [`crate::domain::Game::seeded`] and the match's agents
pub fn derive_match_seed(base_seed: u64, match_no: u64) -> u64 {
    mix(mix(base_seed ^ MATCH_SALT).wrapping_add(match_no))
}

/// Derive the deck seed for one round of a match.
///
/// # Arguments
/// * `game_seed` - Seed the game was created with
/// * `round_no` - Zero-based round index within the game
///
/// # Returns
/// A seed for [`crate::domain::Deck::seeded`]
pub fn derive_dealing_seed(game_seed: u64, round_no: u64) -> u64 {
    mix(game_seed ^ DEALING_SALT)
        .wrapping_add(round_no.wrapping_mul(ROUND_STRIDE))
        .wrapping_add(DEALING_OFFSET)
}

/// Derive the seed of the agent playing for `team` in a match.
pub fn derive_agent_seed(match_seed: u64, team: Team) -> u64 {
    mix(match_seed ^ AGENT_SALT)
        .wrapping_add(u64::from(team.index()).wrapping_mul(TEAM_STRIDE))
        .wrapping_add(AGENT_OFFSET)
}
