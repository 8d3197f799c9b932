//! Bonus aggregation: source collectors and the breakdown accumulator.
//!
//! Every stat bonus a character enjoys comes from some origin (a class
//! feature, a domain card, an equipped item...). The aggregator walks each
//! origin in a fixed order, resolves its features, and folds the results
//! into one [`AggregatedModifiers`] total while keeping the itemized
//! per-source list for display.

use crate::character::{
    AncestrySelection, Armor, ClassSelection, CommunitySelection, InventoryItem, LoadoutCard,
    ResolvedCard, Weapon,
};
use crate::content::ContentSource;
use crate::features::{resolve_modifier_parts, ResolveContext};
use crate::modifiers::{AggregatedModifiers, StatModifiers};
use crate::stats::Trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ten origin kinds a bonus can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusSourceKind {
    ClassFeature,
    SubclassFeature,
    AncestryFeature,
    CommunityFeature,
    DomainCard,
    InventoryItem,
    InventoryFeature,
    EquipmentItem,
    EquipmentFeature,
    ExperienceBonus,
}

/// One row of the bonus audit trail. Only recorded when its modifiers
/// actually changed something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusSource {
    pub kind: BonusSourceKind,
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub modifiers: StatModifiers,
}

/// The cumulative total plus the itemized source list. `total` is always
/// exactly the fold of `sources[*].modifiers` from the all-zero identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusBreakdown {
    pub total: AggregatedModifiers,
    pub sources: Vec<BonusSource>,
}

/// Accumulates bonus sources, keeping the running total in lockstep with the
/// source list. Callers adding rows of their own (e.g. experience bonuses)
/// go through the same `push` the collectors use.
#[derive(Debug, Default)]
pub struct BreakdownBuilder {
    total: AggregatedModifiers,
    sources: Vec<BonusSource>,
}

impl BreakdownBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one contribution. Absent or empty modifier sets are dropped,
    /// so an entry only exists when it changed something.
    pub fn push(
        &mut self,
        kind: BonusSourceKind,
        source_name: impl Into<String>,
        detail: Option<String>,
        modifiers: Option<StatModifiers>,
    ) {
        let Some(modifiers) = modifiers else {
            return;
        };
        if modifiers.is_empty() {
            return;
        }
        self.total.apply(&modifiers);
        self.sources.push(BonusSource {
            kind,
            source_name: source_name.into(),
            detail,
            modifiers,
        });
    }

    pub fn finish(self) -> BonusBreakdown {
        BonusBreakdown {
            total: self.total,
            sources: self.sources,
        }
    }
}

/// Everything the aggregator needs to walk a character's selections.
#[derive(Clone, Copy)]
pub struct BonusInputs<'a> {
    pub class: Option<&'a ClassSelection>,
    pub ancestry: Option<&'a AncestrySelection>,
    pub community: Option<&'a CommunitySelection>,
    pub loadout: &'a [LoadoutCard],
    pub inventory: &'a [InventoryItem],
    pub is_wearing_armor: bool,
    pub context: &'a ResolveContext,
    pub content: &'a dyn ContentSource,
}

impl<'a> BonusInputs<'a> {
    pub fn new(content: &'a dyn ContentSource, context: &'a ResolveContext) -> Self {
        BonusInputs {
            class: None,
            ancestry: None,
            community: None,
            loadout: &[],
            inventory: &[],
            is_wearing_armor: false,
            context,
            content,
        }
    }

    pub fn with_class(mut self, class: &'a ClassSelection) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_ancestry(mut self, ancestry: &'a AncestrySelection) -> Self {
        self.ancestry = Some(ancestry);
        self
    }

    pub fn with_community(mut self, community: &'a CommunitySelection) -> Self {
        self.community = Some(community);
        self
    }

    pub fn with_loadout(mut self, loadout: &'a [LoadoutCard]) -> Self {
        self.loadout = loadout;
        self
    }

    pub fn with_inventory(mut self, inventory: &'a [InventoryItem]) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn wearing_armor(mut self, is_wearing_armor: bool) -> Self {
        self.is_wearing_armor = is_wearing_armor;
        self
    }
}

/// Aggregate every bonus source into a total plus the itemized breakdown.
///
/// Collector order is fixed (class, subclass, ancestry, community, loadout,
/// inventory) and iteration within each collector is input order, so the
/// output is deterministic for identical inputs.
pub fn aggregate_bonus_breakdown(inputs: &BonusInputs<'_>) -> BonusBreakdown {
    let mut builder = BreakdownBuilder::new();
    collect_class(inputs, &mut builder);
    collect_subclass(inputs, &mut builder);
    collect_ancestry(inputs, &mut builder);
    collect_community(inputs, &mut builder);
    collect_loadout(inputs, &mut builder);
    collect_inventory(inputs, &mut builder);
    builder.finish()
}

/// Convenience wrapper returning only the cumulative total.
pub fn aggregate_bonus_modifiers(inputs: &BonusInputs<'_>) -> AggregatedModifiers {
    aggregate_bonus_breakdown(inputs).total
}

fn collect_class(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    let Some(selection) = inputs.class else {
        return;
    };
    match selection {
        ClassSelection::Homebrew { class, .. } => {
            for feature in &class.class_features {
                builder.push(
                    BonusSourceKind::ClassFeature,
                    class.name.clone(),
                    Some(feature.name.clone()),
                    feature.resolve_modifiers(inputs.context),
                );
            }
        }
        ClassSelection::Standard { class, .. } => {
            let Some(definition) = inputs.content.class_by_name(class) else {
                return;
            };
            for feature in &definition.class_features {
                builder.push(
                    BonusSourceKind::ClassFeature,
                    definition.name.clone(),
                    Some(feature.name.clone()),
                    feature.resolve_modifiers(inputs.context),
                );
            }
        }
    }
}

fn collect_subclass(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    let Some(selection) = inputs.class else {
        return;
    };
    match selection {
        ClassSelection::Standard {
            class,
            subclass: Some(subclass),
        } => {
            let Some(definition) = inputs.content.subclass_by_name(class, subclass) else {
                return;
            };
            for feature in &definition.features {
                builder.push(
                    BonusSourceKind::SubclassFeature,
                    definition.name.clone(),
                    Some(feature.name.clone()),
                    feature.resolve_modifiers(inputs.context),
                );
            }
        }
        ClassSelection::Homebrew {
            class,
            subclass: Some(subclass),
        } => {
            let Some(definition) = class
                .subclasses
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(subclass))
            else {
                return;
            };
            for feature in &definition.features {
                builder.push(
                    BonusSourceKind::SubclassFeature,
                    definition.name.clone(),
                    Some(feature.name.clone()),
                    feature.resolve_modifiers(inputs.context),
                );
            }
        }
        _ => {}
    }
}

fn collect_ancestry(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    let Some(selection) = inputs.ancestry else {
        return;
    };
    let (primary, secondary) = selection.features();
    for feature in [primary, secondary] {
        builder.push(
            BonusSourceKind::AncestryFeature,
            selection.name().to_string(),
            Some(feature.name.clone()),
            feature.resolve_modifiers(inputs.context),
        );
    }
}

fn collect_community(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    let Some(selection) = inputs.community else {
        return;
    };
    let feature = selection.feature();
    builder.push(
        BonusSourceKind::CommunityFeature,
        selection.name().to_string(),
        Some(feature.name.clone()),
        feature.resolve_modifiers(inputs.context),
    );
}

fn collect_loadout(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    let resolved: Vec<ResolvedCard> = inputs
        .loadout
        .iter()
        .filter(|card| card.is_active())
        .map(|card| card.resolve_against(inputs.content.card_by_name(&card.name)))
        .collect();

    // Domain counts cover every active card and are computed before any
    // eligibility filtering: a card that is itself excluded still counts
    // toward another card's requirement. Intentional, matches table play.
    let mut domain_counts: HashMap<String, u32> = HashMap::new();
    for card in &resolved {
        if let Some(domain) = &card.domain {
            *domain_counts.entry(domain.to_lowercase()).or_insert(0) += 1;
        }
    }

    for card in &resolved {
        let metadata = card.metadata.as_ref();
        if metadata.and_then(|m| m.requires_armor).unwrap_or(false) && !inputs.is_wearing_armor {
            continue;
        }
        if let Some(requirement) = metadata.and_then(|m| m.domain_requirement.as_ref()) {
            let have = domain_counts
                .get(&requirement.domain.to_lowercase())
                .copied()
                .unwrap_or(0);
            if have < requirement.count {
                continue;
            }
        }
        builder.push(
            BonusSourceKind::DomainCard,
            card.name.clone(),
            None,
            resolve_modifier_parts(
                card.modifiers.as_ref(),
                metadata.and_then(|m| m.scaled_modifiers.as_ref()),
                inputs.context,
            ),
        );
    }
}

fn collect_inventory(inputs: &BonusInputs<'_>, builder: &mut BreakdownBuilder) {
    for item in inputs.inventory.iter().filter(|item| item.is_equipped) {
        if let Some(bonus) = &item.trait_bonus {
            if let Some(t) = Trait::from_name(&bonus.trait_name) {
                builder.push(
                    BonusSourceKind::InventoryItem,
                    item.name.clone(),
                    Some(format!("{} bonus", t.name())),
                    Some(StatModifiers::new().with_trait(t, bonus.bonus)),
                );
            }
        }
        builder.push(
            BonusSourceKind::InventoryItem,
            item.name.clone(),
            None,
            item.stat_modifiers.clone(),
        );
        for feature in &item.features {
            builder.push(
                BonusSourceKind::InventoryFeature,
                item.name.clone(),
                Some(feature.name.clone()),
                feature.resolve_modifiers(inputs.context),
            );
        }
    }
}

/// Aggregate modifiers from equipped armor and weapons. The returned total
/// is what [`AutoCalculateContext::equipment_feature_modifiers`] expects.
///
/// [`AutoCalculateContext::equipment_feature_modifiers`]:
/// crate::resources::AutoCalculateContext::equipment_feature_modifiers
pub fn aggregate_equipment_bonus(
    armor: Option<&Armor>,
    weapons: &[Weapon],
    ctx: &ResolveContext,
) -> BonusBreakdown {
    let mut builder = BreakdownBuilder::new();
    if let Some(armor) = armor {
        builder.push(
            BonusSourceKind::EquipmentItem,
            armor.name.clone(),
            None,
            armor.stat_modifiers.clone(),
        );
        for feature in &armor.features {
            builder.push(
                BonusSourceKind::EquipmentFeature,
                armor.name.clone(),
                Some(feature.name.clone()),
                feature.resolve_modifiers(ctx),
            );
        }
    }
    for weapon in weapons {
        builder.push(
            BonusSourceKind::EquipmentItem,
            weapon.name.clone(),
            None,
            weapon.stat_modifiers.clone(),
        );
        for feature in &weapon.features {
            builder.push(
                BonusSourceKind::EquipmentFeature,
                weapon.name.clone(),
                Some(feature.name.clone()),
                feature.resolve_modifiers(ctx),
            );
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Ancestry, Community, HomebrewClass, HomebrewSubclass};
    use crate::content::BuiltinContent;
    use crate::features::Feature;
    use crate::stats::TraitScores;

    fn fold(breakdown: &BonusBreakdown) -> AggregatedModifiers {
        breakdown
            .sources
            .iter()
            .fold(AggregatedModifiers::default(), |total, source| {
                total.combined(&source.modifiers)
            })
    }

    #[test]
    fn test_empty_inputs() {
        let ctx = ResolveContext::new();
        let breakdown = aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx));
        assert!(breakdown.sources.is_empty());
        assert_eq!(breakdown.total, AggregatedModifiers::default());
    }

    #[test]
    fn test_class_and_subclass_collection() {
        let ctx = ResolveContext::new();
        let class = ClassSelection::Standard {
            class: "Guardian".into(),
            subclass: Some("Stalwart".into()),
        };
        let breakdown =
            aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx).with_class(&class));
        // Guardian's class feature has no modifiers; Stalwart's does.
        assert_eq!(breakdown.sources.len(), 1);
        assert_eq!(breakdown.sources[0].kind, BonusSourceKind::SubclassFeature);
        assert_eq!(breakdown.total.major_threshold, 1);
        assert_eq!(breakdown.total.severe_threshold, 1);
    }

    #[test]
    fn test_unknown_class_contributes_nothing() {
        let ctx = ResolveContext::new();
        let class = ClassSelection::Standard {
            class: "Artificer".into(),
            subclass: Some("Stalwart".into()),
        };
        let breakdown =
            aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx).with_class(&class));
        assert!(breakdown.sources.is_empty());
    }

    #[test]
    fn test_homebrew_class_features() {
        let ctx = ResolveContext::new();
        let class = ClassSelection::Homebrew {
            class: HomebrewClass {
                name: "Spellblade".into(),
                class_features: vec![Feature::new("Arcane Edge", "")
                    .with_modifiers(StatModifiers::new().with_spellcast_rolls(1))],
                subclasses: vec![HomebrewSubclass {
                    name: "Runesinger".into(),
                    features: vec![Feature::new("Runes", "")
                        .with_modifiers(StatModifiers::new().with_evasion(1))],
                }],
            },
            subclass: Some("Runesinger".into()),
        };
        let breakdown =
            aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx).with_class(&class));
        assert_eq!(breakdown.sources.len(), 2);
        assert_eq!(breakdown.sources[0].source_name, "Spellblade");
        assert_eq!(breakdown.sources[1].source_name, "Runesinger");
        assert_eq!(breakdown.total.spellcast_rolls, 1);
        assert_eq!(breakdown.total.evasion, 1);
    }

    #[test]
    fn test_ancestry_contributes_two_entries() {
        let ctx = ResolveContext::new();
        let ancestry = AncestrySelection::Standard {
            ancestry: Ancestry {
                name: "Elf".into(),
                primary_feature: Feature::new("Quick Reactions", "")
                    .with_modifiers(StatModifiers::new().with_evasion(1)),
                secondary_feature: Feature::new("Celestial Trance", "")
                    .with_modifiers(StatModifiers::new().with_trait(Trait::Instinct, 1)),
            },
        };
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_ancestry(&ancestry),
        );
        assert_eq!(breakdown.sources.len(), 2);
        assert!(breakdown
            .sources
            .iter()
            .all(|s| s.kind == BonusSourceKind::AncestryFeature && s.source_name == "Elf"));
        assert_eq!(breakdown.total.evasion, 1);
        assert_eq!(breakdown.total.traits.get(Trait::Instinct), 1);
    }

    #[test]
    fn test_community_single_entry() {
        let ctx = ResolveContext::new();
        let community = CommunitySelection::Standard {
            community: Community {
                name: "Highborne".into(),
                feature: Feature::new("Privilege", "")
                    .with_modifiers(StatModifiers::new().with_trait(Trait::Presence, 1)),
            },
        };
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_community(&community),
        );
        assert_eq!(breakdown.sources.len(), 1);
        assert_eq!(breakdown.total.traits.get(Trait::Presence), 1);
    }

    #[test]
    fn test_loadout_armor_gating() {
        let ctx = ResolveContext::new();
        let loadout = vec![LoadoutCard::new("Forged Steel")];

        let without_armor = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_loadout(&loadout),
        );
        assert!(without_armor.sources.is_empty());
        assert_eq!(without_armor.total.armor_score, 0);

        let with_armor = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx)
                .with_loadout(&loadout)
                .wearing_armor(true),
        );
        assert_eq!(with_armor.sources.len(), 1);
        assert_eq!(with_armor.total.armor_score, 1);
    }

    #[test]
    fn test_loadout_deactivated_card_skipped() {
        let ctx = ResolveContext::new();
        let loadout = vec![LoadoutCard::new("Ferocity").deactivated()];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_loadout(&loadout),
        );
        assert!(breakdown.sources.is_empty());
    }

    #[test]
    fn test_loadout_domain_requirement() {
        let ctx = ResolveContext::new();
        // Bone-Touched needs 4 active Bone cards; itself included there are
        // only 3 here.
        let short = vec![
            LoadoutCard::new("Bone-Touched"),
            LoadoutCard::new("Ferocity"),
            LoadoutCard::new("Deft Maneuvers"),
        ];
        let breakdown =
            aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx).with_loadout(&short));
        assert_eq!(breakdown.total.traits.get(Trait::Agility), 0);

        let full = vec![
            LoadoutCard::new("Bone-Touched"),
            LoadoutCard::new("Ferocity"),
            LoadoutCard::new("Deft Maneuvers"),
            LoadoutCard::new("Bare Bones"),
        ];
        let breakdown =
            aggregate_bonus_breakdown(&BonusInputs::new(&BuiltinContent, &ctx).with_loadout(&full));
        assert_eq!(breakdown.total.traits.get(Trait::Agility), 1);
    }

    #[test]
    fn test_domain_counts_include_ineligible_cards() {
        let ctx = ResolveContext::new();
        // "Untouchable" resolves to no modifiers here (no Agility score in
        // context) but its Bone membership still counts toward the
        // requirement on Bone-Touched.
        let loadout = vec![
            LoadoutCard::new("Bone-Touched"),
            LoadoutCard::new("Ferocity"),
            LoadoutCard::new("Deft Maneuvers"),
            LoadoutCard::new("Untouchable"),
        ];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_loadout(&loadout),
        );
        assert_eq!(breakdown.total.traits.get(Trait::Agility), 1);
        // Untouchable itself contributed no entry.
        assert!(!breakdown
            .sources
            .iter()
            .any(|s| s.source_name == "Untouchable"));
    }

    #[test]
    fn test_inventory_equipped_only() {
        let ctx = ResolveContext::new();
        let inventory = vec![
            InventoryItem::new("Charm of Warding")
                .equipped()
                .with_modifiers(StatModifiers::new().with_evasion(1)),
            InventoryItem::new("Spare Charm")
                .with_modifiers(StatModifiers::new().with_evasion(1)),
        ];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_inventory(&inventory),
        );
        assert_eq!(breakdown.total.evasion, 1);
        assert_eq!(breakdown.sources.len(), 1);
        assert_eq!(breakdown.sources[0].source_name, "Charm of Warding");
    }

    #[test]
    fn test_inventory_trait_bonus_and_features() {
        let ctx = ResolveContext::new().with_proficiency(2);
        let inventory = vec![InventoryItem::new("Gauntlets of Might")
            .equipped()
            .with_trait_bonus("Strength", 1)
            .with_modifiers(StatModifiers::new().with_armor_score(1))
            .with_feature(
                Feature::new("Crushing Grip", "").with_scaled_modifiers(
                    StatModifiers::new().with_attack_rolls(1),
                    crate::features::ScalingBasis::Proficiency,
                ),
            )];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_inventory(&inventory),
        );
        assert_eq!(breakdown.sources.len(), 3);
        assert_eq!(breakdown.sources[0].kind, BonusSourceKind::InventoryItem);
        assert_eq!(breakdown.sources[2].kind, BonusSourceKind::InventoryFeature);
        assert_eq!(breakdown.total.traits.get(Trait::Strength), 1);
        assert_eq!(breakdown.total.armor_score, 1);
        assert_eq!(breakdown.total.attack_rolls, 2);
    }

    #[test]
    fn test_inventory_unknown_trait_name_skipped() {
        let ctx = ResolveContext::new();
        let inventory = vec![InventoryItem::new("Odd Trinket")
            .equipped()
            .with_trait_bonus("Charisma", 2)];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx).with_inventory(&inventory),
        );
        assert!(breakdown.sources.is_empty());
    }

    #[test]
    fn test_total_equals_fold_of_sources() {
        let ctx = ResolveContext::new()
            .with_proficiency(2)
            .with_level(4)
            .with_trait_scores(TraitScores::default().with(Trait::Agility, 2));
        let class = ClassSelection::Standard {
            class: "Warrior".into(),
            subclass: Some("Call of the Brave".into()),
        };
        let loadout = vec![
            LoadoutCard::new("Untouchable"),
            LoadoutCard::new("Ferocity"),
        ];
        let inventory = vec![InventoryItem::new("Charm of Warding")
            .equipped()
            .with_modifiers(StatModifiers::new().with_evasion(1))];
        let breakdown = aggregate_bonus_breakdown(
            &BonusInputs::new(&BuiltinContent, &ctx)
                .with_class(&class)
                .with_loadout(&loadout)
                .with_inventory(&inventory),
        );
        assert!(!breakdown.sources.is_empty());
        assert_eq!(breakdown.total, fold(&breakdown));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let ctx = ResolveContext::new().with_proficiency(1);
        let class = ClassSelection::Standard {
            class: "Warrior".into(),
            subclass: None,
        };
        let inputs = BonusInputs::new(&BuiltinContent, &ctx).with_class(&class);
        let first = aggregate_bonus_breakdown(&inputs);
        let second = aggregate_bonus_breakdown(&inputs);
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder_skips_empty_sources() {
        let mut builder = BreakdownBuilder::new();
        builder.push(BonusSourceKind::ExperienceBonus, "Blacksmith", None, None);
        builder.push(
            BonusSourceKind::ExperienceBonus,
            "Blacksmith",
            None,
            Some(StatModifiers::new()),
        );
        builder.push(
            BonusSourceKind::ExperienceBonus,
            "Battle-Hardened",
            None,
            Some(StatModifiers::new().with_attack_rolls(2)),
        );
        let breakdown = builder.finish();
        assert_eq!(breakdown.sources.len(), 1);
        assert_eq!(breakdown.total.attack_rolls, 2);
        assert_eq!(breakdown.total, fold(&breakdown));
    }

    #[test]
    fn test_equipment_bonus() {
        let ctx = ResolveContext::new();
        let armor = Armor {
            name: "Runeplate".into(),
            base_score: 4,
            thresholds_major: 7,
            thresholds_severe: 14,
            evasion_modifier: -1,
            stat_modifiers: None,
            features: vec![Feature::new("Warded", "")
                .with_modifiers(StatModifiers::new().with_severe_threshold(2))],
        };
        let weapons = vec![Weapon {
            name: "Greatblade".into(),
            stat_modifiers: Some(StatModifiers::new().with_attack_rolls(1)),
            features: vec![],
        }];
        let breakdown = aggregate_equipment_bonus(Some(&armor), &weapons, &ctx);
        assert_eq!(breakdown.sources.len(), 2);
        assert_eq!(breakdown.sources[0].kind, BonusSourceKind::EquipmentFeature);
        assert_eq!(breakdown.sources[1].kind, BonusSourceKind::EquipmentItem);
        assert_eq!(breakdown.total.severe_threshold, 2);
        assert_eq!(breakdown.total.attack_rolls, 1);
    }
}
