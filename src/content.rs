//! Canonical game content lookup.
//!
//! The engine does not own the full reference tables; it only needs lookups
//! that return a feature list (or `None`). [`ContentSource`] is that
//! boundary. A small built-in table is provided for tests and demo wiring,
//! far short of the complete game data, which lives with the caller.

use crate::character::DomainCard;
use crate::features::{DomainRequirement, Feature, FeatureMetadata, ScaledModifiers, ScalingBasis};
use crate::modifiers::StatModifiers;
use crate::stats::Trait;
use serde::{Deserialize, Serialize};

/// A canonical class definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    pub base_hp: i32,
    pub base_evasion: i32,
    #[serde(default)]
    pub class_features: Vec<Feature>,
    #[serde(default)]
    pub subclasses: Vec<SubclassDefinition>,
}

/// A canonical subclass definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubclassDefinition {
    pub name: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// Boundary trait for canonical content lookups. Misses are `None`, never
/// errors; the collectors treat a miss as "contributes nothing."
pub trait ContentSource {
    fn class_by_name(&self, name: &str) -> Option<&ClassDefinition>;
    fn subclass_by_name(&self, class: &str, subclass: &str) -> Option<&SubclassDefinition>;
    fn card_by_name(&self, name: &str) -> Option<&DomainCard>;
}

/// The built-in content table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinContent;

impl ContentSource for BuiltinContent {
    fn class_by_name(&self, name: &str) -> Option<&ClassDefinition> {
        get_class(name)
    }

    fn subclass_by_name(&self, class: &str, subclass: &str) -> Option<&SubclassDefinition> {
        get_subclass(class, subclass)
    }

    fn card_by_name(&self, name: &str) -> Option<&DomainCard> {
        get_card(name)
    }
}

/// Get a built-in class by name (case-insensitive).
pub fn get_class(name: &str) -> Option<&'static ClassDefinition> {
    CLASSES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// Get a built-in subclass by (class, subclass) pair (case-insensitive).
pub fn get_subclass(class: &str, subclass: &str) -> Option<&'static SubclassDefinition> {
    get_class(class)?
        .subclasses
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(subclass.trim()))
}

/// Get a built-in domain card by name (case-insensitive).
pub fn get_card(name: &str) -> Option<&'static DomainCard> {
    CARDS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

lazy_static::lazy_static! {
    /// Built-in classes.
    pub static ref CLASSES: Vec<ClassDefinition> = vec![
        ClassDefinition {
            name: "Guardian".to_string(),
            base_hp: 7,
            base_evasion: 9,
            class_features: vec![
                Feature::new(
                    "Unstoppable",
                    "Once per long rest, become Unstoppable: reduce incoming physical damage severity by one step.",
                ),
            ],
            subclasses: vec![
                SubclassDefinition {
                    name: "Stalwart".to_string(),
                    features: vec![
                        Feature::new(
                            "Unwavering",
                            "Your years of training have hardened you. Gain a permanent +1 to your damage thresholds.",
                        )
                        .with_modifiers(
                            StatModifiers::new().with_major_threshold(1).with_severe_threshold(1),
                        ),
                    ],
                },
                SubclassDefinition {
                    name: "Vengeance".to_string(),
                    features: vec![
                        Feature::new(
                            "At Ease",
                            "Gain an additional Stress slot and +1 to attack rolls made to avenge an ally.",
                        )
                        .with_modifiers(StatModifiers::new().with_attack_rolls(1)),
                    ],
                },
            ],
        },
        ClassDefinition {
            name: "Warrior".to_string(),
            base_hp: 6,
            base_evasion: 11,
            class_features: vec![
                Feature::new(
                    "Combat Training",
                    "You know the tricks of close combat. Add your proficiency to your attack rolls.",
                )
                .with_scaled_modifiers(
                    StatModifiers::new().with_attack_rolls(1),
                    ScalingBasis::Proficiency,
                ),
            ],
            subclasses: vec![
                SubclassDefinition {
                    name: "Call of the Brave".to_string(),
                    features: vec![
                        Feature::new(
                            "Courage",
                            "When you fail a roll with Fear, you gain a Hope.",
                        ),
                    ],
                },
            ],
        },
        ClassDefinition {
            name: "Wizard".to_string(),
            base_hp: 5,
            base_evasion: 11,
            class_features: vec![
                Feature::new(
                    "Strange Patterns",
                    "Choose a number between 1 and 12; when you roll it on a Duality Die, gain a Hope. Your studies grant +1 to spellcast rolls.",
                )
                .with_modifiers(StatModifiers::new().with_spellcast_rolls(1)),
            ],
            subclasses: vec![
                SubclassDefinition {
                    name: "School of Knowledge".to_string(),
                    features: vec![
                        Feature::new(
                            "Accomplished",
                            "A lifetime of study sharpens the mind. Gain a permanent +1 bonus to Knowledge.",
                        )
                        .with_modifiers(StatModifiers::new().with_trait(Trait::Knowledge, 1)),
                    ],
                },
            ],
        },
        ClassDefinition {
            name: "Rogue".to_string(),
            base_hp: 6,
            base_evasion: 12,
            class_features: vec![
                Feature::new(
                    "Cloaked",
                    "Any time you would be Hidden, you are instead Cloaked and remain unseen while stationary.",
                ),
            ],
            subclasses: vec![
                SubclassDefinition {
                    name: "Nightwalker".to_string(),
                    features: vec![
                        Feature::new(
                            "Fleeting Shadow",
                            "You move through darkness unseen. Gain a permanent +1 to Evasion.",
                        )
                        .with_modifiers(StatModifiers::new().with_evasion(1)),
                    ],
                },
            ],
        },
    ];

    /// Built-in domain cards.
    pub static ref CARDS: Vec<DomainCard> = vec![
        DomainCard {
            name: "Forged Steel".to_string(),
            domain: "Valor".to_string(),
            level: 1,
            description: "While wearing armor, its plates answer your will: gain +1 Armor Score.".to_string(),
            modifiers: Some(StatModifiers::new().with_armor_score(1)),
            metadata: Some(FeatureMetadata {
                requires_armor: Some(true),
                ..Default::default()
            }),
        },
        DomainCard {
            name: "Untouchable".to_string(),
            domain: "Bone".to_string(),
            level: 2,
            description: "Gain a bonus to your Evasion equal to half your Agility.".to_string(),
            modifiers: None,
            metadata: Some(FeatureMetadata {
                scaled_modifiers: Some(ScaledModifiers {
                    modifiers: Some(StatModifiers::new().with_evasion(1)),
                    basis: ScalingBasis::Trait {
                        trait_name: Trait::Agility,
                        factor: 0.5,
                        rounding: crate::features::Rounding::Ceil,
                    },
                }),
                ..Default::default()
            }),
        },
        DomainCard {
            name: "Bone-Touched".to_string(),
            domain: "Bone".to_string(),
            level: 7,
            description: "When 4 or more of your active cards are from the Bone domain, gain +1 Agility.".to_string(),
            modifiers: Some(StatModifiers::new().with_trait(Trait::Agility, 1)),
            metadata: Some(FeatureMetadata {
                domain_requirement: Some(DomainRequirement {
                    domain: "Bone".to_string(),
                    count: 4,
                }),
                ..Default::default()
            }),
        },
        DomainCard {
            name: "Ferocity".to_string(),
            domain: "Bone".to_string(),
            level: 3,
            description: "Your strikes land with terrible momentum. Gain +1 to attack rolls.".to_string(),
            modifiers: Some(StatModifiers::new().with_attack_rolls(1)),
            metadata: None,
        },
        DomainCard {
            name: "Deft Maneuvers".to_string(),
            domain: "Bone".to_string(),
            level: 1,
            description: "Once per rest, mark a Stress to move without provoking.".to_string(),
            modifiers: None,
            metadata: None,
        },
        DomainCard {
            name: "Bare Bones".to_string(),
            domain: "Bone".to_string(),
            level: 1,
            description: "When you choose not to wear armor, your base Armor Score is 3.".to_string(),
            modifiers: None,
            metadata: None,
        },
    ];
}
