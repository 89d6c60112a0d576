//! Great person definition structures

use crate::config::{GlobalMultiplier, MultiplierType, TechAge};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a great person, never reused once published
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GreatPersonId(String);

impl GreatPersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GreatPersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for GreatPersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GreatPersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Effect magnitude at a level
pub type ValueFn = fn(u32) -> f64;

/// Amount a direct effect pushes into its global channel
pub type ContributionFn = fn(&GreatPersonDefinition, u32) -> f64;

/// What a great person does to the simulation
#[derive(Debug, Clone)]
pub enum GreatPersonEffect {
    /// Custom contribution to one global multiplier channel
    Direct {
        channel: GlobalMultiplier,
        contribution: ContributionFn,
    },
    /// Adds `value(level)` to every listed channel of every listed building
    Boost {
        multipliers: &'static [MultiplierType],
        buildings: &'static [&'static str],
    },
}

/// Immutable great person definition
#[derive(Debug, Clone)]
pub struct GreatPersonDefinition {
    pub id: GreatPersonId,
    pub age: TechAge,
    /// Display time span, e.g. "c. 1800s BC"
    pub time: &'static str,
    /// `None` means unbounded
    pub max_level: Option<u32>,
    pub value: ValueFn,
    pub effect: GreatPersonEffect,
}

impl GreatPersonDefinition {
    /// Definition whose effect boosts a set of buildings
    pub fn boost(
        id: &str,
        age: TechAge,
        time: &'static str,
        value: ValueFn,
        multipliers: &'static [MultiplierType],
        buildings: &'static [&'static str],
    ) -> Self {
        Self {
            id: GreatPersonId::from(id),
            age,
            time,
            max_level: None,
            value,
            effect: GreatPersonEffect::Boost {
                multipliers,
                buildings,
            },
        }
    }

    /// Definition whose effect feeds a global channel with `value(level)`
    pub fn direct(
        id: &str,
        age: TechAge,
        time: &'static str,
        value: ValueFn,
        channel: GlobalMultiplier,
    ) -> Self {
        Self::direct_with(id, age, time, value, channel, scaled_value)
    }

    pub fn direct_with(
        id: &str,
        age: TechAge,
        time: &'static str,
        value: ValueFn,
        channel: GlobalMultiplier,
        contribution: ContributionFn,
    ) -> Self {
        Self {
            id: GreatPersonId::from(id),
            age,
            time,
            max_level: None,
            value,
            effect: GreatPersonEffect::Direct {
                channel,
                contribution,
            },
        }
    }

    pub fn with_max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }

    #[inline]
    pub fn clamp_level(&self, level: u32) -> u32 {
        match self.max_level {
            Some(max) => level.min(max),
            None => level,
        }
    }

    /// Effect magnitude at `level`, clamped to `max_level`
    #[inline]
    pub fn value_at(&self, level: u32) -> f64 {
        (self.value)(self.clamp_level(level))
    }

    pub fn is_boost(&self) -> bool {
        matches!(self.effect, GreatPersonEffect::Boost { .. })
    }
}

// Value formulas used by the built-in table

pub fn linear(level: u32) -> f64 {
    level as f64
}

pub fn half(level: u32) -> f64 {
    level as f64 * 0.5
}

pub fn double(level: u32) -> f64 {
    level as f64 * 2.0
}

pub fn triple(level: u32) -> f64 {
    level as f64 * 3.0
}

/// Contribution equal to the definition's value at the clamped level
pub fn scaled_value(def: &GreatPersonDefinition, level: u32) -> f64 {
    def.value_at(level)
}

/// Contribution equal to the clamped level, ignoring the value formula
pub fn raw_level(def: &GreatPersonDefinition, level: u32) -> f64 {
    def.clamp_level(level) as f64
}
