//! Save/load of the player profile
//!
//! Saving is best effort: at most one write is in flight, extra requests are
//! dropped with a warning, and failures are logged rather than retried. The
//! game keeps running on in-memory state when storage is unavailable.

mod load;
mod saver;
mod store;

pub use load::*;
pub use saver::*;
pub use store::*;

use crate::reborn::RebornProgressionState;
use serde::{Deserialize, Serialize};

/// Everything written to the save slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    #[serde(default)]
    pub progression: RebornProgressionState,
}
