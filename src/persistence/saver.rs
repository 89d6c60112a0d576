//! Fire-and-forget saving

use super::store::SaveStore;
use super::SavedGame;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// What happened to a save request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveRequest {
    /// Handed to a background writer; completion is not reported
    Started,
    /// Another save was still in flight
    Dropped,
    /// Could not serialize the snapshot
    Failed,
}

/// Clears the in-flight flag when the writer finishes, unwinds or is never run
struct ResetOnDrop(Arc<AtomicBool>);

impl Drop for ResetOnDrop {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Writes saves on the runtime's blocking pool, one at a time
pub struct Saver {
    store: Arc<dyn SaveStore>,
    key: String,
    runtime: Handle,
    saving: Arc<AtomicBool>,
}

impl Saver {
    pub fn new(store: Arc<dyn SaveStore>, key: impl Into<String>, runtime: Handle) -> Self {
        Self {
            store,
            key: key.into(),
            runtime,
            saving: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Arc<dyn SaveStore> {
        &self.store
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    /// Snapshot `game` and write it in the background.
    ///
    /// Requests made while a write is in flight are dropped, not queued.
    pub fn save(&self, game: &SavedGame) -> SaveRequest {
        if self
            .saving
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(key = %self.key, "received a save request while another one is ongoing, ignoring it");
            return SaveRequest::Dropped;
        }

        let payload = match serde_json::to_string(game) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize saved game");
                self.saving.store(false, Ordering::Release);
                return SaveRequest::Failed;
            }
        };

        let store = self.store.clone();
        let key = self.key.clone();
        let guard = ResetOnDrop(self.saving.clone());
        // Blocking file IO stays off the caller's thread
        self.runtime.spawn_blocking(move || {
            let _guard = guard;
            match store.write(&key, &payload) {
                Ok(()) => debug!(key = %key, bytes = payload.len(), "game saved"),
                Err(e) => warn!(key = %key, error = %e, "save failed"),
            }
        });
        SaveRequest::Started
    }
}

impl std::fmt::Debug for Saver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Saver")
            .field("key", &self.key)
            .field("saving", &self.is_saving())
            .finish()
    }
}
