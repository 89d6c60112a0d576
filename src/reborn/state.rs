//! Persisted reborn progression state

use crate::error::{GreatPeopleError, Result};
use crate::great_person::GreatPersonId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Number of great persons offered in one choice set
pub const CHOICES_PER_SET: usize = 3;

/// Owned great person record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreatPersonInventory {
    pub level: u32,
    /// Progression currency accumulated toward the next level
    pub amount: u64,
}

impl GreatPersonInventory {
    /// Record created the first time a great person is chosen
    pub const FIRST_PICK: GreatPersonInventory = GreatPersonInventory {
        level: 1,
        amount: 0,
    };
}

/// Ordered triple of great persons offered as one reborn reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingChoiceSet([GreatPersonId; CHOICES_PER_SET]);

impl PendingChoiceSet {
    pub fn new(choices: [GreatPersonId; CHOICES_PER_SET]) -> Self {
        Self(choices)
    }

    pub fn ids(&self) -> &[GreatPersonId; CHOICES_PER_SET] {
        &self.0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|c| c.as_str() == id)
    }
}

impl From<[&str; CHOICES_PER_SET]> for PendingChoiceSet {
    fn from(ids: [&str; CHOICES_PER_SET]) -> Self {
        Self(ids.map(GreatPersonId::from))
    }
}

/// Great people owned by one player plus the queue of unresolved choice sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebornProgressionState {
    #[serde(default)]
    great_people: BTreeMap<GreatPersonId, GreatPersonInventory>,
    #[serde(default)]
    great_people_choices: VecDeque<PendingChoiceSet>,
}

impl RebornProgressionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a choice set to the back of the queue.
    ///
    /// The caller guarantees the ids are distinct and present in the catalog.
    pub fn enqueue_choice(&mut self, choices: PendingChoiceSet) {
        self.great_people_choices.push_back(choices);
    }

    #[inline]
    pub fn peek_front(&self) -> Option<&PendingChoiceSet> {
        self.great_people_choices.front()
    }

    /// Consume the front choice set with the player's pick.
    ///
    /// A first pick creates a level 1 record; later picks only add one to
    /// `amount`, saturating at `u64::MAX`. On error nothing changes.
    pub fn resolve_front(&mut self, chosen: &str) -> Result<GreatPersonInventory> {
        let front = self.great_people_choices.front().ok_or_else(|| {
            GreatPeopleError::InvalidChoice("no pending great person choices".to_string())
        })?;
        if !front.contains(chosen) {
            return Err(GreatPeopleError::InvalidChoice(format!(
                "{} is not one of the offered great persons",
                chosen
            )));
        }

        self.great_people_choices.pop_front();
        let inventory = self
            .great_people
            .entry(GreatPersonId::from(chosen))
            .and_modify(|inv| inv.amount = inv.amount.saturating_add(1))
            .or_insert(GreatPersonInventory::FIRST_PICK);
        Ok(*inventory)
    }

    pub fn choices_left(&self) -> usize {
        self.great_people_choices.len()
    }

    pub fn choices(&self) -> impl Iterator<Item = &PendingChoiceSet> {
        self.great_people_choices.iter()
    }

    pub fn inventory(&self, id: &str) -> Option<&GreatPersonInventory> {
        self.great_people.get(id)
    }

    pub fn great_people(&self) -> impl Iterator<Item = (&GreatPersonId, &GreatPersonInventory)> {
        self.great_people.iter()
    }

    /// Overwrite a record directly, used by the upgrade flow and tooling
    pub fn insert_inventory(&mut self, id: &str, inventory: GreatPersonInventory) {
        self.great_people.insert(GreatPersonId::from(id), inventory);
    }

    /// Drop owned records and choice sets referencing ids `keep` rejects.
    /// Returns `(records_removed, sets_removed)`.
    pub fn retain_known(&mut self, keep: impl Fn(&str) -> bool) -> (usize, usize) {
        let owned_before = self.great_people.len();
        self.great_people.retain(|id, _| keep(id.as_str()));

        let sets_before = self.great_people_choices.len();
        self.great_people_choices
            .retain(|set| set.ids().iter().all(|id| keep(id.as_str())));

        (
            owned_before - self.great_people.len(),
            sets_before - self.great_people_choices.len(),
        )
    }
}
