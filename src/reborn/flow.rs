//! Choice resolution sequencing
//!
//! Drives repeated `resolve_front` calls until the pending queue drains, then
//! signals that the upgrade screen should follow. Purely reactive: there are
//! no timers and no skip transition.

use super::state::PendingChoiceSet;
use super::store::ObservableProgression;
use crate::error::Result;
use crate::observe::{EventBus, Subscription};
use tracing::debug;

/// Flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// Nothing to choose
    #[default]
    Idle,
    /// The front choice set is on screen
    Presenting,
}

/// Emitted once each time the flow goes from `Presenting` to `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDrained {
    /// Picks made since the flow last entered `Presenting`
    pub resolved: usize,
}

/// Result of a successful pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// More choice sets remain
    Next { remaining: usize },
    /// The queue is empty; the caller moves on to the upgrade screen
    Drained,
}

#[derive(Debug, Default)]
pub struct ChoiceResolutionFlow {
    state: FlowState,
    resolved: usize,
    /// Progression generation the current round started from
    generation: u64,
    drained: EventBus<QueueDrained>,
}

impl ChoiceResolutionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Re-read the queue, e.g. after a reborn appended choices or a save was loaded.
    ///
    /// A replaced state always starts a fresh round, even if the new queue
    /// is non-empty.
    pub fn sync(&mut self, progression: &ObservableProgression) -> FlowState {
        let has_choices = progression.peek_front().is_some();
        if self.generation != progression.generation() {
            self.generation = progression.generation();
            if self.state == FlowState::Presenting {
                debug!("progression replaced, restarting choice round");
            }
            self.state = if has_choices {
                FlowState::Presenting
            } else {
                FlowState::Idle
            };
            self.resolved = 0;
            return self.state;
        }
        match (self.state, has_choices) {
            (FlowState::Idle, true) => {
                self.state = FlowState::Presenting;
                self.resolved = 0;
            }
            (FlowState::Presenting, false) => {
                // Queue was replaced underneath us, not drained by picks
                debug!("choice queue emptied externally, returning to idle");
                self.state = FlowState::Idle;
            }
            _ => {}
        }
        self.state
    }

    /// Choice set currently on screen
    pub fn current<'a>(&self, progression: &'a ObservableProgression) -> Option<&'a PendingChoiceSet> {
        match self.state {
            FlowState::Presenting => progression.peek_front(),
            FlowState::Idle => None,
        }
    }

    /// Apply the player's pick to the front choice set.
    ///
    /// On error the flow state is untouched and the error goes back to the
    /// caller for display.
    pub fn pick(&mut self, progression: &mut ObservableProgression, chosen: &str) -> Result<PickOutcome> {
        let before = (self.state, self.resolved, self.generation);
        self.sync(progression);
        if let Err(err) = progression.resolve_front(chosen) {
            (self.state, self.resolved, self.generation) = before;
            return Err(err);
        }
        self.resolved += 1;

        let remaining = progression.state().choices_left();
        if remaining > 0 {
            return Ok(PickOutcome::Next { remaining });
        }

        self.state = FlowState::Idle;
        let event = QueueDrained {
            resolved: self.resolved,
        };
        self.resolved = 0;
        debug!(resolved = event.resolved, "great person choice queue drained");
        self.drained.emit(&event);
        Ok(PickOutcome::Drained)
    }

    pub fn on_drained(&self, listener: impl Fn(&QueueDrained) + Send + Sync + 'static) -> Subscription {
        self.drained.subscribe(listener)
    }

    pub fn off_drained(&self, subscription: Subscription) -> bool {
        self.drained.unsubscribe(subscription)
    }
}
