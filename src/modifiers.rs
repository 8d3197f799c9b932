//! Stat modifier algebra: merging, scaling, and aggregation.
//!
//! Two distinct shapes flow through the engine. [`StatModifiers`] is the
//! per-source delta where every field is optional: "this source does not
//! mention Evasion" and "this source adds zero Evasion" are different
//! things, and only the former survives a merge as absent. The aggregated
//! total is an [`AggregatedModifiers`], which materializes every field as a
//! concrete number (absent becomes 0).

use crate::stats::{Trait, TraitBonuses};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Add two optional numbers. Absent plus absent stays absent; otherwise
/// absent is treated as 0.
pub fn sum_optional(a: Option<i32>, b: Option<i32>) -> Option<i32> {
    match (a, b) {
        (None, None) => None,
        _ => Some(a.unwrap_or(0) + b.unwrap_or(0)),
    }
}

/// Stat deltas contributed by a single feature, domain card, or item.
///
/// A `None` field means the source does not mention that stat. Trait deltas
/// use the same convention: a missing key means the trait is untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatModifiers {
    pub evasion: Option<i32>,
    pub proficiency: Option<i32>,
    pub armor_score: Option<i32>,
    pub major_threshold: Option<i32>,
    pub severe_threshold: Option<i32>,
    pub attack_rolls: Option<i32>,
    pub spellcast_rolls: Option<i32>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub traits: HashMap<Trait, i32>,
}

impl StatModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evasion(mut self, value: i32) -> Self {
        self.evasion = Some(value);
        self
    }

    pub fn with_proficiency(mut self, value: i32) -> Self {
        self.proficiency = Some(value);
        self
    }

    pub fn with_armor_score(mut self, value: i32) -> Self {
        self.armor_score = Some(value);
        self
    }

    pub fn with_major_threshold(mut self, value: i32) -> Self {
        self.major_threshold = Some(value);
        self
    }

    pub fn with_severe_threshold(mut self, value: i32) -> Self {
        self.severe_threshold = Some(value);
        self
    }

    pub fn with_attack_rolls(mut self, value: i32) -> Self {
        self.attack_rolls = Some(value);
        self
    }

    pub fn with_spellcast_rolls(mut self, value: i32) -> Self {
        self.spellcast_rolls = Some(value);
        self
    }

    pub fn with_trait(mut self, t: Trait, value: i32) -> Self {
        self.traits.insert(t, value);
        self
    }

    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.evasion.is_none()
            && self.proficiency.is_none()
            && self.armor_score.is_none()
            && self.major_threshold.is_none()
            && self.severe_threshold.is_none()
            && self.attack_rolls.is_none()
            && self.spellcast_rolls.is_none()
            && self.traits.is_empty()
    }

    /// Merge two modifier sets field-by-field via optional addition.
    pub fn merged(&self, other: &StatModifiers) -> StatModifiers {
        let mut traits = self.traits.clone();
        for (t, value) in &other.traits {
            *traits.entry(*t).or_insert(0) += value;
        }
        StatModifiers {
            evasion: sum_optional(self.evasion, other.evasion),
            proficiency: sum_optional(self.proficiency, other.proficiency),
            armor_score: sum_optional(self.armor_score, other.armor_score),
            major_threshold: sum_optional(self.major_threshold, other.major_threshold),
            severe_threshold: sum_optional(self.severe_threshold, other.severe_threshold),
            attack_rolls: sum_optional(self.attack_rolls, other.attack_rolls),
            spellcast_rolls: sum_optional(self.spellcast_rolls, other.spellcast_rolls),
            traits,
        }
    }

    /// Merge two optional modifier sets. `None` + `None` stays `None`.
    pub fn merge_optional(
        a: Option<&StatModifiers>,
        b: Option<&StatModifiers>,
    ) -> Option<StatModifiers> {
        match (a, b) {
            (None, None) => None,
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (Some(a), Some(b)) => Some(a.merged(b)),
        }
    }

    /// Scale every present field by `multiplier`. Absent fields stay absent.
    ///
    /// A multiplier of 0 suppresses the set entirely: returning a zero-filled
    /// set would turn absent fields into present zeros, which merge
    /// differently.
    pub fn scaled(&self, multiplier: i32) -> Option<StatModifiers> {
        if multiplier <= 0 || self.is_empty() {
            return None;
        }
        Some(StatModifiers {
            evasion: self.evasion.map(|v| v * multiplier),
            proficiency: self.proficiency.map(|v| v * multiplier),
            armor_score: self.armor_score.map(|v| v * multiplier),
            major_threshold: self.major_threshold.map(|v| v * multiplier),
            severe_threshold: self.severe_threshold.map(|v| v * multiplier),
            attack_rolls: self.attack_rolls.map(|v| v * multiplier),
            spellcast_rolls: self.spellcast_rolls.map(|v| v * multiplier),
            traits: self
                .traits
                .iter()
                .map(|(t, v)| (*t, v * multiplier))
                .collect(),
        })
    }
}

/// The cumulative modifier total across every source.
///
/// Unlike [`StatModifiers`], every field is fully materialized; the default
/// value (all zeros) is the identity element for [`AggregatedModifiers::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatedModifiers {
    pub evasion: i32,
    pub proficiency: i32,
    pub armor_score: i32,
    pub major_threshold: i32,
    pub severe_threshold: i32,
    pub attack_rolls: i32,
    pub spellcast_rolls: i32,
    pub traits: TraitBonuses,
}

impl AggregatedModifiers {
    /// Fold one source's modifiers into the running total. Per-field simple
    /// addition, so folding is commutative and associative.
    pub fn apply(&mut self, modifiers: &StatModifiers) {
        self.evasion += modifiers.evasion.unwrap_or(0);
        self.proficiency += modifiers.proficiency.unwrap_or(0);
        self.armor_score += modifiers.armor_score.unwrap_or(0);
        self.major_threshold += modifiers.major_threshold.unwrap_or(0);
        self.severe_threshold += modifiers.severe_threshold.unwrap_or(0);
        self.attack_rolls += modifiers.attack_rolls.unwrap_or(0);
        self.spellcast_rolls += modifiers.spellcast_rolls.unwrap_or(0);
        for (t, value) in &modifiers.traits {
            self.traits.add(*t, *value);
        }
    }

    /// Consuming variant of [`apply`](Self::apply), convenient for folds.
    pub fn combined(mut self, modifiers: &StatModifiers) -> Self {
        self.apply(modifiers);
        self
    }
}
