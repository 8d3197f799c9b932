//! Auto-calculated resource defaults.
//!
//! Derives default HP, Evasion, Armor Score, and damage thresholds from
//! class base stats, armor base stats, level, and aggregated
//! equipment-feature modifiers. The results pre-fill resource editors;
//! callers may let users override them, so these values are recomputed on
//! demand and never stored as authoritative.

use crate::modifiers::AggregatedModifiers;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CLASS_HP: i32 = 6;
pub const DEFAULT_CLASS_EVASION: i32 = 10;
pub const DEFAULT_MAJOR_THRESHOLD: i32 = 5;
pub const DEFAULT_SEVERE_THRESHOLD: i32 = 11;

/// Inputs for the auto-resource calculator. Every field is optional; absent
/// fields fall back to the game's baseline values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoCalculateContext {
    pub class_hp: Option<i32>,
    pub class_evasion: Option<i32>,
    pub armor_score: Option<i32>,
    pub armor_evasion_modifier: Option<i32>,
    pub armor_thresholds_major: Option<i32>,
    pub armor_thresholds_severe: Option<i32>,
    pub level: Option<i32>,
    pub equipment_feature_modifiers: Option<AggregatedModifiers>,
}

/// Derived resource defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedAutoValues {
    pub max_hp: i32,
    pub evasion: i32,
    pub armor_score: i32,
    pub thresholds_major: i32,
    pub thresholds_severe: i32,
}

/// Compute default resource values. Pure function of its inputs.
pub fn compute_auto_resources(ctx: &AutoCalculateContext) -> ComputedAutoValues {
    let feature_mods = ctx
        .equipment_feature_modifiers
        .clone()
        .unwrap_or_default();
    // Level adds its full value to both thresholds; negative levels add
    // nothing but leave the bases untouched.
    let level_bonus = ctx.level.unwrap_or(1).max(0);
    ComputedAutoValues {
        // HP growth past the class base comes from level-up choices, which
        // live outside this calculation.
        max_hp: ctx.class_hp.unwrap_or(DEFAULT_CLASS_HP),
        evasion: ctx.class_evasion.unwrap_or(DEFAULT_CLASS_EVASION)
            + ctx.armor_evasion_modifier.unwrap_or(0)
            + feature_mods.evasion,
        armor_score: ctx.armor_score.unwrap_or(0) + feature_mods.armor_score,
        thresholds_major: ctx.armor_thresholds_major.unwrap_or(DEFAULT_MAJOR_THRESHOLD)
            + level_bonus
            + feature_mods.major_threshold,
        thresholds_severe: ctx
            .armor_thresholds_severe
            .unwrap_or(DEFAULT_SEVERE_THRESHOLD)
            + level_bonus
            + feature_mods.severe_threshold,
    }
}

/// Narrow context for recalculating just the damage thresholds, used when a
/// caller has threshold modifiers on hand but not a full
/// [`AutoCalculateContext`]. Equipment and bonus modifier pairs are summed
/// before being added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdContext {
    pub armor_major: Option<i32>,
    pub armor_severe: Option<i32>,
    pub level: Option<i32>,
    pub equipment_major: Option<i32>,
    pub equipment_severe: Option<i32>,
    pub bonus_major: Option<i32>,
    pub bonus_severe: Option<i32>,
}

/// The recomputed damage thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub major: i32,
    pub severe: i32,
}

/// Recompute the two damage thresholds. Agrees with
/// [`compute_auto_resources`] for equivalent inputs.
pub fn compute_thresholds(ctx: &ThresholdContext) -> Thresholds {
    let level_bonus = ctx.level.unwrap_or(1).max(0);
    Thresholds {
        major: ctx.armor_major.unwrap_or(DEFAULT_MAJOR_THRESHOLD)
            + level_bonus
            + ctx.equipment_major.unwrap_or(0)
            + ctx.bonus_major.unwrap_or(0),
        severe: ctx.armor_severe.unwrap_or(DEFAULT_SEVERE_THRESHOLD)
            + level_bonus
            + ctx.equipment_severe.unwrap_or(0)
            + ctx.bonus_severe.unwrap_or(0),
    }
}
