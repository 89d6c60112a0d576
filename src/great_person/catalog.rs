//! Read-only great person registry

use super::definition::{GreatPersonDefinition, GreatPersonEffect, GreatPersonId};
use super::definitions::builtin_definitions;
use crate::config::TechAge;
use crate::error::{GreatPeopleError, Result};
use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Built-in catalog, built once on first access
static BUILTIN: Lazy<Arc<GreatPersonCatalog>> =
    Lazy::new(|| Arc::new(GreatPersonCatalog::index(builtin_definitions())));

/// Immutable lookup table of great person definitions
///
/// Keeps the authoring order for listing and an id index for lookups.
#[derive(Debug, Clone)]
pub struct GreatPersonCatalog {
    definitions: Vec<GreatPersonDefinition>,
    index: AHashMap<GreatPersonId, usize>,
}

impl GreatPersonCatalog {
    /// Build a catalog, rejecting duplicate ids and empty boosts
    pub fn from_definitions(definitions: Vec<GreatPersonDefinition>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(definitions.len());
        for def in &definitions {
            if !seen.insert(def.id.as_str()) {
                return Err(GreatPeopleError::InvalidDefinition(format!(
                    "duplicate great person id {}",
                    def.id
                )));
            }
            if let GreatPersonEffect::Boost {
                multipliers,
                buildings,
            } = &def.effect
            {
                if multipliers.is_empty() || buildings.is_empty() {
                    return Err(GreatPeopleError::InvalidDefinition(format!(
                        "boost of {} needs at least one multiplier and one building",
                        def.id
                    )));
                }
            }
        }
        Ok(Self::index(definitions))
    }

    fn index(definitions: Vec<GreatPersonDefinition>) -> Self {
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id.clone(), i))
            .collect();
        Self { definitions, index }
    }

    /// Shared handle to the built-in catalog
    pub fn builtin() -> Arc<GreatPersonCatalog> {
        BUILTIN.clone()
    }

    #[inline]
    pub fn get(&self, id: &str) -> Result<&GreatPersonDefinition> {
        self.index
            .get(id)
            .map(|&i| &self.definitions[i])
            .ok_or_else(|| GreatPeopleError::NotFound(GreatPersonId::from(id)))
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All definitions in authoring order
    pub fn all(&self) -> &[GreatPersonDefinition] {
        &self.definitions
    }

    /// Definitions from `age` or older
    pub fn up_to_age(&self, age: TechAge) -> impl Iterator<Item = &GreatPersonDefinition> {
        self.definitions.iter().filter(move |def| def.age <= age)
    }

    /// Effect magnitude of `id` at `level`, clamped to its max level
    pub fn value(&self, id: &str, level: u32) -> Result<f64> {
        Ok(self.get(id)?.value_at(level))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
