//! Observable wrapper around the progression state

use super::state::{GreatPersonInventory, PendingChoiceSet, RebornProgressionState};
use crate::error::Result;
use crate::observe::{EventBus, Subscription};

/// Owns the progression state and notifies subscribers after every change
#[derive(Debug, Default)]
pub struct ObservableProgression {
    state: RebornProgressionState,
    /// Bumped on every `replace`
    generation: u64,
    changed: EventBus<RebornProgressionState>,
}

impl ObservableProgression {
    pub fn new(state: RebornProgressionState) -> Self {
        Self {
            state,
            generation: 0,
            changed: EventBus::new(),
        }
    }

    pub fn state(&self) -> &RebornProgressionState {
        &self.state
    }

    /// Number of whole-state replacements so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn into_inner(self) -> RebornProgressionState {
        self.state
    }

    /// Swap in a new state (e.g. after loading a save) and notify
    pub fn replace(&mut self, state: RebornProgressionState) -> RebornProgressionState {
        let previous = std::mem::replace(&mut self.state, state);
        self.generation = self.generation.wrapping_add(1);
        self.notify();
        previous
    }

    pub fn enqueue_choice(&mut self, choices: PendingChoiceSet) {
        self.state.enqueue_choice(choices);
        self.notify();
    }

    #[inline]
    pub fn peek_front(&self) -> Option<&PendingChoiceSet> {
        self.state.peek_front()
    }

    /// Resolve the front choice set; subscribers are notified only on success
    pub fn resolve_front(&mut self, chosen: &str) -> Result<GreatPersonInventory> {
        let inventory = self.state.resolve_front(chosen)?;
        self.notify();
        Ok(inventory)
    }

    /// Apply an arbitrary edit, then notify
    pub fn update<R>(&mut self, edit: impl FnOnce(&mut RebornProgressionState) -> R) -> R {
        let result = edit(&mut self.state);
        self.notify();
        result
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&RebornProgressionState) + Send + Sync + 'static,
    ) -> Subscription {
        self.changed.subscribe(listener)
    }

    /// Call `listener` with the current state right away, then on every change
    pub fn watch(
        &self,
        listener: impl Fn(&RebornProgressionState) + Send + Sync + 'static,
    ) -> Subscription {
        listener(&self.state);
        self.changed.subscribe(listener)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.changed.unsubscribe(subscription)
    }

    pub fn notify(&self) {
        self.changed.emit(&self.state);
    }
}
