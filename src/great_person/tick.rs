//! Great person effect application

use super::catalog::GreatPersonCatalog;
use super::definition::{GreatPersonDefinition, GreatPersonEffect};
use super::text::source_label;
use crate::config::{GlobalMultiplier, MultiplierType};
use crate::error::Result;
use crate::i18n::Translator;
use crate::reborn::RebornProgressionState;
use ahash::AHashMap;

/// Receiver of multiplier contributions for the next simulation tick
pub trait MultiplierSink {
    fn add_building_multiplier(
        &mut self,
        building: &str,
        contributions: &[(MultiplierType, f64)],
        source: &str,
    );

    fn add_global_multiplier(&mut self, channel: GlobalMultiplier, value: f64, source: &str);
}

/// A single global contribution
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplierEntry {
    pub value: f64,
    pub source: String,
}

/// A single building contribution across one or more channels
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingMultiplier {
    pub contributions: Vec<(MultiplierType, f64)>,
    pub source: String,
}

/// In-memory sink collecting one tick worth of contributions
#[derive(Debug, Clone, Default)]
pub struct TickMultipliers {
    pub buildings: AHashMap<String, Vec<BuildingMultiplier>>,
    pub globals: AHashMap<GlobalMultiplier, Vec<MultiplierEntry>>,
}

impl TickMultipliers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all contributions to a global channel
    pub fn global_total(&self, channel: GlobalMultiplier) -> f64 {
        self.globals
            .get(&channel)
            .map(|entries| entries.iter().map(|e| e.value).sum::<f64>())
            .unwrap_or(0.0)
    }

    /// Sum of all contributions to one channel of one building
    pub fn building_total(&self, building: &str, multiplier: MultiplierType) -> f64 {
        self.buildings
            .get(building)
            .map(|entries| {
                entries
                    .iter()
                    .flat_map(|e| e.contributions.iter())
                    .filter(|(m, _)| *m == multiplier)
                    .map(|(_, v)| *v)
                    .sum::<f64>()
            })
            .unwrap_or(0.0)
    }

    pub fn clear(&mut self) {
        self.buildings.clear();
        self.globals.clear();
    }
}

impl MultiplierSink for TickMultipliers {
    fn add_building_multiplier(
        &mut self,
        building: &str,
        contributions: &[(MultiplierType, f64)],
        source: &str,
    ) {
        self.buildings
            .entry(building.to_string())
            .or_default()
            .push(BuildingMultiplier {
                contributions: contributions.to_vec(),
                source: source.to_string(),
            });
    }

    fn add_global_multiplier(&mut self, channel: GlobalMultiplier, value: f64, source: &str) {
        self.globals.entry(channel).or_default().push(MultiplierEntry {
            value,
            source: source.to_string(),
        });
    }
}

/// Push the contributions of one great person at `level` into `sink`
pub fn tick(
    def: &GreatPersonDefinition,
    level: u32,
    permanent: bool,
    sink: &mut dyn MultiplierSink,
    translator: &dyn Translator,
) {
    let source = source_label(def, permanent, translator);
    match &def.effect {
        GreatPersonEffect::Direct {
            channel,
            contribution,
        } => {
            sink.add_global_multiplier(*channel, contribution(def, level), &source);
        }
        GreatPersonEffect::Boost {
            multipliers,
            buildings,
        } => {
            let value = def.value_at(level);
            let contributions: Vec<(MultiplierType, f64)> =
                multipliers.iter().map(|m| (*m, value)).collect();
            for building in buildings.iter() {
                sink.add_building_multiplier(building, &contributions, &source);
            }
        }
    }
}

/// Tick every great person the player owns.
///
/// Fails with `NotFound` if the inventory references an id missing from the
/// catalog; loaded saves are migrated before this can happen.
pub fn tick_owned(
    catalog: &GreatPersonCatalog,
    state: &RebornProgressionState,
    permanent: bool,
    sink: &mut dyn MultiplierSink,
    translator: &dyn Translator,
) -> Result<()> {
    for (id, inventory) in state.great_people() {
        let def = catalog.get(id.as_str())?;
        tick(def, inventory.level, permanent, sink, translator);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::KeyTranslator;
    use crate::reborn::GreatPersonInventory;

    #[test]
    fn test_tick_boost() {
        let catalog = GreatPersonCatalog::builtin();
        let mut sink = TickMultipliers::new();
        tick(catalog.get("Agamemnon").unwrap(), 3, false, &mut sink, &KeyTranslator);

        assert_eq!(sink.building_total("StoneQuarry", MultiplierType::Output), 3.0);
        assert_eq!(sink.building_total("Marbleworks", MultiplierType::Storage), 3.0);
        assert_eq!(sink.building_total("Marbleworks", MultiplierType::Worker), 0.0);
        assert_eq!(
            sink.buildings.get("StoneQuarry").unwrap()[0].source,
            "SourceGreatPerson(person=Agamemnon)"
        );
    }

    #[test]
    fn test_tick_direct_scaled_and_raw() {
        let catalog = GreatPersonCatalog::builtin();
        let mut sink = TickMultipliers::new();
        tick(catalog.get("Rurik").unwrap(), 2, true, &mut sink, &KeyTranslator);
        tick(catalog.get("RamessesII").unwrap(), 4, true, &mut sink, &KeyTranslator);

        assert_eq!(sink.global_total(GlobalMultiplier::Happiness), 4.0);
        assert_eq!(sink.global_total(GlobalMultiplier::BuilderCapacity), 4.0);
        assert_eq!(
            sink.globals.get(&GlobalMultiplier::Happiness).unwrap()[0].source,
            "SourceGreatPersonPermanent(person=Rurik)"
        );
    }

    #[test]
    fn test_tick_owned() {
        let catalog = GreatPersonCatalog::builtin();
        let mut state = RebornProgressionState::default();
        state.insert_inventory("Socrates", GreatPersonInventory { level: 2, amount: 0 });
        state.insert_inventory("CharlesDarwin", GreatPersonInventory { level: 1, amount: 3 });

        let mut sink = TickMultipliers::new();
        tick_owned(&catalog, &state, true, &mut sink, &KeyTranslator).unwrap();
        assert_eq!(sink.global_total(GlobalMultiplier::SciencePerBusyWorker), 4.0);
    }

    #[test]
    fn test_tick_owned_unknown_id_fails() {
        let catalog = GreatPersonCatalog::builtin();
        let mut state = RebornProgressionState::default();
        state.insert_inventory("Plato", GreatPersonInventory { level: 1, amount: 0 });

        let mut sink = TickMultipliers::new();
        assert!(tick_owned(&catalog, &state, false, &mut sink, &KeyTranslator).is_err());
    }
}
