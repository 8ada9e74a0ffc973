//! Agent configuration handling.
//!
//! Standard fields are extracted from a JSON config while agent-specific
//! fields stay available in `custom`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for agents.
///
/// ```json
/// {"seed": 12345, "envido_threshold": 29}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Optional RNG seed for reproducible decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Agent-specific configuration.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AgentConfig {
    /// Build from optional JSON, falling back to an empty config when the
    /// value does not match the schema.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::empty()
    }
}
