//! Game features and scaled-modifier resolution.
//!
//! A feature is any named rules text a character picks up: a class feature,
//! an ancestry trait, a domain card effect, an item ability. Features carry
//! an optional flat modifier set and an optional metadata annex whose
//! scaled modifiers grow with proficiency, level, or a trait score.

use crate::modifiers::StatModifiers;
use crate::stats::{Trait, TraitScores};
use serde::{Deserialize, Serialize};

/// Rounding applied when a trait-scaled multiplier comes out fractional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Floor,
    Ceil,
    Round,
}

impl Rounding {
    fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
            Rounding::Round => value.round(),
        }
    }
}

fn default_factor() -> f64 {
    1.0
}

/// What a scaled modifier set grows with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "per", rename_all = "lowercase")]
pub enum ScalingBasis {
    Proficiency,
    Level,
    Trait {
        #[serde(rename = "trait")]
        trait_name: Trait,
        #[serde(default = "default_factor")]
        factor: f64,
        #[serde(default)]
        rounding: Rounding,
    },
}

impl ScalingBasis {
    /// Per-trait scaling with the default factor (1.0) and rounding.
    pub fn per_trait(trait_name: Trait) -> Self {
        ScalingBasis::Trait {
            trait_name,
            factor: 1.0,
            rounding: Rounding::Floor,
        }
    }

    /// Resolve the integer multiplier from the context, clamped to >= 0.
    /// Missing trait scores resolve to 0.
    pub fn multiplier(&self, ctx: &ResolveContext) -> i32 {
        match self {
            ScalingBasis::Proficiency => ctx.proficiency.unwrap_or(0).max(0),
            ScalingBasis::Level => ctx.level.unwrap_or(0).max(0),
            ScalingBasis::Trait {
                trait_name,
                factor,
                rounding,
            } => {
                let Some(scores) = &ctx.trait_scores else {
                    return 0;
                };
                let raw = scores.get(*trait_name) as f64 * factor;
                (rounding.apply(raw) as i32).max(0)
            }
        }
    }
}

/// A modifier set that must be multiplied by a runtime-resolved factor
/// before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledModifiers {
    /// The base set to scale. Missing modifiers make the annex inert.
    pub modifiers: Option<StatModifiers>,
    #[serde(flatten)]
    pub basis: ScalingBasis,
}

/// Minimum count of active cards in a domain before a card's modifiers apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRequirement {
    pub domain: String,
    pub count: u32,
}

/// Metadata annex shared by features and domain cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureMetadata {
    pub scaled_modifiers: Option<ScaledModifiers>,
    /// When true the card or feature only applies while wearing armor.
    pub requires_armor: Option<bool>,
    pub domain_requirement: Option<DomainRequirement>,
}

impl FeatureMetadata {
    /// Field-wise merge preferring `self` (the override) over `base`.
    pub fn merged_over(&self, base: &FeatureMetadata) -> FeatureMetadata {
        FeatureMetadata {
            scaled_modifiers: self
                .scaled_modifiers
                .clone()
                .or_else(|| base.scaled_modifiers.clone()),
            requires_armor: self.requires_armor.or(base.requires_armor),
            domain_requirement: self
                .domain_requirement
                .clone()
                .or_else(|| base.domain_requirement.clone()),
        }
    }
}

/// Runtime values scaled modifiers resolve against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveContext {
    pub proficiency: Option<i32>,
    pub level: Option<i32>,
    pub trait_scores: Option<TraitScores>,
}

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proficiency(mut self, proficiency: i32) -> Self {
        self.proficiency = Some(proficiency);
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_trait_scores(mut self, scores: TraitScores) -> Self {
        self.trait_scores = Some(scores);
        self
    }
}

/// A named game feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<StatModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeatureMetadata>,
}

impl Feature {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Feature {
            name: name.into(),
            description: description.into(),
            modifiers: None,
            metadata: None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_scaled_modifiers(mut self, modifiers: StatModifiers, basis: ScalingBasis) -> Self {
        let metadata = self.metadata.get_or_insert_with(FeatureMetadata::default);
        metadata.scaled_modifiers = Some(ScaledModifiers {
            modifiers: Some(modifiers),
            basis,
        });
        self
    }

    /// Resolve this feature's total stat contribution under `ctx`.
    ///
    /// Returns `None` only when both the flat and scaled contributions are
    /// entirely absent.
    pub fn resolve_modifiers(&self, ctx: &ResolveContext) -> Option<StatModifiers> {
        resolve_modifier_parts(
            self.modifiers.as_ref(),
            self.metadata
                .as_ref()
                .and_then(|m| m.scaled_modifiers.as_ref()),
            ctx,
        )
    }
}

/// Shared resolution core for features and loadout cards: the flat part and
/// the scaled part, merged by optional addition.
pub fn resolve_modifier_parts(
    flat: Option<&StatModifiers>,
    scaled: Option<&ScaledModifiers>,
    ctx: &ResolveContext,
) -> Option<StatModifiers> {
    let scaled_part = scaled.and_then(|annex| {
        let base = annex.modifiers.as_ref()?;
        base.scaled(annex.basis.multiplier(ctx))
    });
    StatModifiers::merge_optional(flat, scaled_part.as_ref())
}
