//! Level progress of owned great persons

use super::state::RebornProgressionState;

/// Amount needed to reach `target_level`: 1, 2, 4, 8, ...
#[inline]
pub fn upgrade_cost(target_level: u32) -> u64 {
    2u64.saturating_pow(target_level.saturating_sub(1))
}

/// Progress toward the next level, as shown under each choice card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    /// `None` if the player never picked this great person
    pub level: Option<u32>,
    pub amount: u64,
    /// Cost of the next level
    pub required: u64,
    /// `amount / required`, may exceed 1.0
    pub progress: f64,
}

pub fn level_progress(state: &RebornProgressionState, id: &str) -> LevelProgress {
    let inventory = state.inventory(id);
    let level = inventory.map(|inv| inv.level);
    let amount = inventory.map(|inv| inv.amount).unwrap_or(0);
    let required = upgrade_cost(level.unwrap_or(0).saturating_add(1));

    LevelProgress {
        level,
        amount,
        required,
        progress: amount as f64 / required as f64,
    }
}
