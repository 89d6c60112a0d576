//! Great People Core - reborn progression engine for an idle city builder
//!
//! This crate holds the great person catalog (eras, value formulas, building
//! boosts and global multiplier effects), the per-player progression state
//! persisted in the save, and the choice flow that turns reborn rewards into
//! owned great persons.
//!
//! Everything runs synchronously on the caller's thread except saving, which
//! hands a serialized snapshot to a background writer.

pub mod config;
pub mod context;
pub mod error;
pub mod great_person;
pub mod i18n;
pub mod observe;
pub mod persistence;
pub mod reborn;

// ============================================================================
// Re-exports
// ============================================================================

pub use crate::config::CoreConfig;
pub use crate::context::{ContextSlot, GameContext};
pub use crate::error::{GreatPeopleError, Result};
pub use crate::great_person::{GreatPersonCatalog, GreatPersonDefinition, GreatPersonId};
pub use crate::reborn::{
    ChoiceResolutionFlow, FlowState, ObservableProgression, PendingChoiceSet, PickOutcome,
    RebornProgressionState,
};
