use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::round::RoundOptions;
use crate::domain::rules::{max_seats, TrucoResponder};
use crate::errors::domain::DomainError;

pub const DEFAULT_TARGET_POINTS: u32 = 40;
pub const DEFAULT_TEAM_SIZE: usize = 1;

/// Match settings shared by the simulator and library callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub target_points: u32,
    pub team_size: usize,
    pub show_teammate_cards: bool,
    pub truco_responder: TrucoResponder,
    /// Seed for round decks; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_points: DEFAULT_TARGET_POINTS,
            team_size: DEFAULT_TEAM_SIZE,
            show_teammate_cards: false,
            truco_responder: TrucoResponder::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a JSON config file; missing keys take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading game config");
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|e| {
            DomainError::invalid_config(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `TRUCO_*` environment variables.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply the `TRUCO_*` overrides found through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRUCO_TARGET_POINTS") {
            self.target_points = parse_var("TRUCO_TARGET_POINTS", &v)?;
        }
        if let Some(v) = lookup("TRUCO_TEAM_SIZE") {
            self.team_size = parse_var("TRUCO_TEAM_SIZE", &v)?;
        }
        if let Some(v) = lookup("TRUCO_SHOW_TEAMMATE_CARDS") {
            self.show_teammate_cards = parse_flag("TRUCO_SHOW_TEAMMATE_CARDS", &v)?;
        }
        if let Some(v) = lookup("TRUCO_RESPONDER") {
            self.truco_responder = v
                .parse()
                .map_err(|e| DomainError::invalid_config(format!("TRUCO_RESPONDER: {e}")))?;
        }
        if let Some(v) = lookup("TRUCO_SEED") {
            self.seed = Some(parse_var("TRUCO_SEED", &v)?);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn round_options(&self) -> RoundOptions {
        RoundOptions {
            show_teammate_cards: self.show_teammate_cards,
            truco_responder: self.truco_responder,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.target_points == 0 {
            return Err(DomainError::invalid_config(
                "target_points must be positive",
            ));
        }
        let max_team = max_seats() / 2;
        if self.team_size == 0 || self.team_size > max_team {
            return Err(DomainError::invalid_config(format!(
                "team_size must be between 1 and {max_team}, got {}",
                self.team_size
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, DomainError> {
    value
        .trim()
        .parse()
        .map_err(|_| DomainError::invalid_config(format!("{key}: cannot parse '{value}'")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, DomainError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DomainError::invalid_config(format!(
            "{key}: expected a boolean, got '{value}'"
        ))),
    }
}
