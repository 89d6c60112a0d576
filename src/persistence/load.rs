//! Loading and migrating saved games

use super::store::SaveStore;
use super::SavedGame;
use crate::great_person::GreatPersonCatalog;
use tracing::{info, warn};

/// What migration removed from a loaded save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub removed_great_people: usize,
    pub removed_choice_sets: usize,
}

/// Read the save under `key`.
///
/// Missing, unreadable or malformed saves yield `None` and are logged; the
/// caller keeps its in-memory state.
pub fn load_game(store: &dyn SaveStore, key: &str) -> Option<SavedGame> {
    let payload = match store.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => return None,
        Err(e) => {
            warn!(key = %key, error = %e, "loadGame failed");
            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(game) => Some(game),
        Err(e) => {
            warn!(key = %key, error = %e, "saved game is malformed");
            None
        }
    }
}

/// Strip references to great persons that no longer exist in `catalog`
pub fn migrate_saved_game(game: &mut SavedGame, catalog: &GreatPersonCatalog) -> MigrationReport {
    let (removed_great_people, removed_choice_sets) =
        game.progression.retain_known(|id| catalog.contains(id));

    let report = MigrationReport {
        removed_great_people,
        removed_choice_sets,
    };
    if report != MigrationReport::default() {
        info!(
            removed_great_people,
            removed_choice_sets, "removed unknown great persons from saved game"
        );
    }
    report
}
