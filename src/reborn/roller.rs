//! Reborn reward rolling

use super::state::{PendingChoiceSet, CHOICES_PER_SET};
use super::store::ObservableProgression;
use crate::config::{CoreConfig, TechAge};
use crate::error::{GreatPeopleError, Result};
use crate::great_person::{GreatPersonCatalog, GreatPersonDefinition};
use rand::seq::SliceRandom;
use rand::Rng;

/// Definitions eligible for a roll, optionally capped at `max_age`
pub fn eligible_pool(catalog: &GreatPersonCatalog, max_age: Option<TechAge>) -> Vec<&GreatPersonDefinition> {
    match max_age {
        Some(age) => catalog.up_to_age(age).collect(),
        None => catalog.all().iter().collect(),
    }
}

/// Sample three distinct great persons for one choice set
pub fn roll_choice_set<R: Rng + ?Sized>(
    catalog: &GreatPersonCatalog,
    max_age: Option<TechAge>,
    rng: &mut R,
) -> Result<PendingChoiceSet> {
    let pool = eligible_pool(catalog, max_age);
    if pool.len() < CHOICES_PER_SET {
        return Err(GreatPeopleError::InvalidDefinition(format!(
            "need {} eligible great persons to roll a choice set, found {}",
            CHOICES_PER_SET,
            pool.len()
        )));
    }

    let picked: Vec<&GreatPersonDefinition> =
        pool.choose_multiple(rng, CHOICES_PER_SET).copied().collect();
    Ok(PendingChoiceSet::new([
        picked[0].id.clone(),
        picked[1].id.clone(),
        picked[2].id.clone(),
    ]))
}

/// Append the choice sets one reborn grants; returns how many were added
pub fn grant_reborn_choices<R: Rng + ?Sized>(
    progression: &mut ObservableProgression,
    catalog: &GreatPersonCatalog,
    config: &CoreConfig,
    rng: &mut R,
) -> Result<usize> {
    // Roll everything first so a failure leaves the queue untouched
    let sets = (0..config.choices_per_reborn)
        .map(|_| roll_choice_set(catalog, config.roll_max_age, rng))
        .collect::<Result<Vec<_>>>()?;

    let granted = sets.len();
    progression.update(|state| {
        for set in sets {
            state.enqueue_choice(set);
        }
    });
    Ok(granted)
}
