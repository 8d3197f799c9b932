//! Character rules engine for a Daggerheart-style tabletop RPG sheet.
//!
//! This crate provides the rules-resolution core a character sheet app
//! builds on:
//! - Bonus aggregation: fold stat modifiers from class, subclass, ancestry,
//!   community, domain-card loadout, and equipped inventory into one total
//!   with a per-source breakdown
//! - Auto-resource derivation: default HP, Evasion, Armor Score, and damage
//!   thresholds from class/armor base stats and level
//! - Death move resolution: the three-branch d12 procedure with its
//!   follow-up allocation step
//!
//! Everything is synchronous and pure: the engine consumes plain data
//! describing a character's selections and returns plain values. UI,
//! persistence, and the full game data tables live with the caller.
//!
//! # Quick Start
//!
//! ```
//! use daggerheart_core::{
//!     aggregate_bonus_breakdown, compute_auto_resources, AutoCalculateContext, BonusInputs,
//!     BuiltinContent, ClassSelection, ResolveContext,
//! };
//!
//! let context = ResolveContext::new().with_proficiency(2).with_level(3);
//! let class = ClassSelection::Standard {
//!     class: "Guardian".into(),
//!     subclass: Some("Stalwart".into()),
//! };
//!
//! let breakdown = aggregate_bonus_breakdown(
//!     &BonusInputs::new(&BuiltinContent, &context).with_class(&class),
//! );
//! assert_eq!(breakdown.total.major_threshold, 1);
//!
//! let values = compute_auto_resources(&AutoCalculateContext {
//!     class_hp: Some(7),
//!     class_evasion: Some(9),
//!     level: Some(3),
//!     ..Default::default()
//! });
//! assert_eq!(values.max_hp, 7);
//! assert_eq!(values.thresholds_major, 8);
//! ```

pub mod bonuses;
pub mod character;
pub mod content;
pub mod death;
pub mod features;
pub mod modifiers;
pub mod resources;
pub mod stats;

// Primary public API
pub use bonuses::{
    aggregate_bonus_breakdown, aggregate_bonus_modifiers, aggregate_equipment_bonus,
    BonusBreakdown, BonusInputs, BonusSource, BonusSourceKind, BreakdownBuilder,
};
pub use character::{
    Ancestry, AncestrySelection, Armor, ClassSelection, Community, CommunitySelection, DomainCard,
    HomebrewClass, HomebrewSubclass, InventoryItem, LoadoutCard, TraitBonus, Weapon,
};
pub use content::{BuiltinContent, ClassDefinition, ContentSource, SubclassDefinition};
pub use death::{
    avoid_death, blaze_of_glory, resolve_death_move, risk_it_all, AllocationError, DeathMove,
    DeathMoveResult, CLEAR_ALL,
};
pub use features::{
    resolve_modifier_parts, DomainRequirement, Feature, FeatureMetadata, ResolveContext, Rounding,
    ScaledModifiers, ScalingBasis,
};
pub use modifiers::{sum_optional, AggregatedModifiers, StatModifiers};
pub use resources::{
    compute_auto_resources, compute_thresholds, AutoCalculateContext, ComputedAutoValues,
    ThresholdContext, Thresholds,
};
pub use stats::{Trait, TraitBonuses, TraitScores};
