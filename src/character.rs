//! Character selection data: what a player has picked on their sheet.
//!
//! These are plain data shapes supplied by the caller; the engine has no
//! knowledge of how they are persisted or edited. Selection modes that were
//! mutually exclusive on the sheet (standard vs. mixed vs. homebrew) are
//! tagged unions here, so an inconsistent mode/data pairing cannot be
//! represented.

use crate::features::{Feature, FeatureMetadata};
use crate::modifiers::StatModifiers;
use serde::{Deserialize, Serialize};

// ============================================================================
// Class & Subclass
// ============================================================================

/// A user-authored class with its own features and subclasses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomebrewClass {
    pub name: String,
    #[serde(default)]
    pub class_features: Vec<Feature>,
    #[serde(default)]
    pub subclasses: Vec<HomebrewSubclass>,
}

/// A user-authored subclass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomebrewSubclass {
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// The character's class selection. Standard classes resolve through the
/// canonical content lookup; homebrew classes carry their features inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ClassSelection {
    Standard {
        class: String,
        #[serde(default)]
        subclass: Option<String>,
    },
    Homebrew {
        class: HomebrewClass,
        #[serde(default)]
        subclass: Option<String>,
    },
}

impl ClassSelection {
    pub fn class_name(&self) -> &str {
        match self {
            ClassSelection::Standard { class, .. } => class,
            ClassSelection::Homebrew { class, .. } => &class.name,
        }
    }

    pub fn subclass_name(&self) -> Option<&str> {
        match self {
            ClassSelection::Standard { subclass, .. }
            | ClassSelection::Homebrew { subclass, .. } => subclass.as_deref(),
        }
    }
}

// ============================================================================
// Ancestry & Community
// ============================================================================

/// An ancestry: a name plus its primary and secondary features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ancestry {
    pub name: String,
    pub primary_feature: Feature,
    pub secondary_feature: Feature,
}

/// Exactly one ancestry mode is active at a time. Every mode contributes a
/// primary and a secondary feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AncestrySelection {
    /// One canonical ancestry, contributing both of its features.
    Standard { ancestry: Ancestry },
    /// A synthesized ancestry taking the primary feature from one ancestry
    /// and the secondary feature from another.
    Mixed {
        name: String,
        primary_from: Ancestry,
        secondary_from: Ancestry,
    },
    /// A user-authored ancestry.
    Homebrew {
        name: String,
        #[serde(default)]
        description: String,
        primary_feature: Feature,
        secondary_feature: Feature,
    },
}

impl AncestrySelection {
    pub fn name(&self) -> &str {
        match self {
            AncestrySelection::Standard { ancestry } => &ancestry.name,
            AncestrySelection::Mixed { name, .. } => name,
            AncestrySelection::Homebrew { name, .. } => name,
        }
    }

    /// The (primary, secondary) feature pair for the active mode.
    pub fn features(&self) -> (&Feature, &Feature) {
        match self {
            AncestrySelection::Standard { ancestry } => {
                (&ancestry.primary_feature, &ancestry.secondary_feature)
            }
            AncestrySelection::Mixed {
                primary_from,
                secondary_from,
                ..
            } => (
                &primary_from.primary_feature,
                &secondary_from.secondary_feature,
            ),
            AncestrySelection::Homebrew {
                primary_feature,
                secondary_feature,
                ..
            } => (primary_feature, secondary_feature),
        }
    }
}

/// A community: a name plus its single feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    pub name: String,
    pub feature: Feature,
}

/// The character's community selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CommunitySelection {
    Standard { community: Community },
    Homebrew { name: String, feature: Feature },
}

impl CommunitySelection {
    pub fn name(&self) -> &str {
        match self {
            CommunitySelection::Standard { community } => &community.name,
            CommunitySelection::Homebrew { name, .. } => name,
        }
    }

    pub fn feature(&self) -> &Feature {
        match self {
            CommunitySelection::Standard { community } => &community.feature,
            CommunitySelection::Homebrew { feature, .. } => feature,
        }
    }
}

// ============================================================================
// Loadout (domain cards)
// ============================================================================

/// A canonical domain card definition, as served by the content lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCard {
    pub name: String,
    pub domain: String,
    pub level: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<StatModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeatureMetadata>,
}

/// One domain card in the character's active loadout: the card name plus
/// per-instance overrides of the canonical definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadoutCard {
    pub name: String,
    /// Explicit deactivation only; `None` counts as active.
    #[serde(default)]
    pub is_activated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<StatModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeatureMetadata>,
}

impl LoadoutCard {
    pub fn new(name: impl Into<String>) -> Self {
        LoadoutCard {
            name: name.into(),
            is_activated: None,
            modifiers: None,
            metadata: None,
        }
    }

    pub fn deactivated(mut self) -> Self {
        self.is_activated = Some(false);
        self
    }

    pub fn with_modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_metadata(mut self, metadata: FeatureMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_active(&self) -> bool {
        self.is_activated != Some(false)
    }

    /// Merge this card with its canonical definition. The loadout card's own
    /// fields win; the metadata bags deep-merge with the override preferred.
    pub fn resolve_against(&self, canonical: Option<&DomainCard>) -> ResolvedCard {
        let metadata = match (&self.metadata, canonical.and_then(|c| c.metadata.as_ref())) {
            (Some(own), Some(base)) => Some(own.merged_over(base)),
            (Some(own), None) => Some(own.clone()),
            (None, Some(base)) => Some(base.clone()),
            (None, None) => None,
        };
        ResolvedCard {
            name: self.name.clone(),
            domain: canonical.map(|c| c.domain.clone()),
            modifiers: self
                .modifiers
                .clone()
                .or_else(|| canonical.and_then(|c| c.modifiers.clone())),
            metadata,
        }
    }
}

/// A loadout card after canonical-vs-override resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCard {
    pub name: String,
    pub domain: Option<String>,
    pub modifiers: Option<StatModifiers>,
    pub metadata: Option<FeatureMetadata>,
}

// ============================================================================
// Inventory & Equipment
// ============================================================================

/// A trait bonus declared on an item, by trait name. Names that do not match
/// one of the six traits contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitBonus {
    pub trait_name: String,
    pub bonus: i32,
}

/// An item in the character's inventory. Only equipped items contribute
/// bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    #[serde(default)]
    pub is_equipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_modifiers: Option<StatModifiers>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_bonus: Option<TraitBonus>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>) -> Self {
        InventoryItem {
            name: name.into(),
            is_equipped: false,
            stat_modifiers: None,
            trait_bonus: None,
            features: Vec::new(),
        }
    }

    pub fn equipped(mut self) -> Self {
        self.is_equipped = true;
        self
    }

    pub fn with_modifiers(mut self, modifiers: StatModifiers) -> Self {
        self.stat_modifiers = Some(modifiers);
        self
    }

    pub fn with_trait_bonus(mut self, trait_name: impl Into<String>, bonus: i32) -> Self {
        self.trait_bonus = Some(TraitBonus {
            trait_name: trait_name.into(),
            bonus,
        });
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

/// Equipped armor. Base stats feed the auto-resource calculator; flat
/// modifiers and features feed the equipment bonus aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub name: String,
    pub base_score: i32,
    pub thresholds_major: i32,
    pub thresholds_severe: i32,
    #[serde(default)]
    pub evasion_modifier: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_modifiers: Option<StatModifiers>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// An equipped weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_modifiers: Option<StatModifiers>,
    #[serde(default)]
    pub features: Vec<Feature>,
}
