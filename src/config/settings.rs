//! Runtime configuration

use serde::{Deserialize, Serialize};

use super::TechAge;
use crate::error::Result;

/// Runtime configuration for the progression core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Key the saved game is stored under
    pub save_key: String,
    /// Newest age eligible for reborn rolls; `None` allows every age
    pub roll_max_age: Option<TechAge>,
    /// Number of choice sets granted per reborn
    pub choices_per_reborn: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            save_key: "CivIdle".to_string(),
            roll_max_age: None,
            choices_per_reborn: 1,
        }
    }
}

impl CoreConfig {
    /// Parse configuration from JSON, missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
