//! Multiplier channel enumerations

use serde::{Deserialize, Serialize};

/// Per-building multiplier channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MultiplierType {
    Output,
    Storage,
    Worker,
}

impl MultiplierType {
    /// Human readable description used in boost texts
    pub fn desc(&self) -> &'static str {
        match self {
            MultiplierType::Output => "Production Multiplier",
            MultiplierType::Storage => "Storage Multiplier",
            MultiplierType::Worker => "Worker Capacity Multiplier",
        }
    }
}

/// Global (city-wide) multiplier channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GlobalMultiplier {
    BuilderCapacity,
    SciencePerIdleWorker,
    SciencePerBusyWorker,
    TransportCapacity,
    Happiness,
}
