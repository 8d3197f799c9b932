//! Character traits and trait score containers.
//!
//! Characters have six traits (Agility, Strength, Finesse, Instinct,
//! Presence, Knowledge). Trait scores can be negative; bonuses from
//! features and items are tracked separately from the base scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six character traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trait {
    Agility,
    Strength,
    Finesse,
    Instinct,
    Presence,
    Knowledge,
}

impl Trait {
    pub fn name(&self) -> &'static str {
        match self {
            Trait::Agility => "Agility",
            Trait::Strength => "Strength",
            Trait::Finesse => "Finesse",
            Trait::Instinct => "Instinct",
            Trait::Presence => "Presence",
            Trait::Knowledge => "Knowledge",
        }
    }

    /// Case-insensitive lookup. Unknown names yield `None` rather than an
    /// error, so malformed data contributes nothing downstream.
    pub fn from_name(name: &str) -> Option<Trait> {
        match name.trim().to_lowercase().as_str() {
            "agility" => Some(Trait::Agility),
            "strength" => Some(Trait::Strength),
            "finesse" => Some(Trait::Finesse),
            "instinct" => Some(Trait::Instinct),
            "presence" => Some(Trait::Presence),
            "knowledge" => Some(Trait::Knowledge),
            _ => None,
        }
    }

    pub fn all() -> [Trait; 6] {
        [
            Trait::Agility,
            Trait::Strength,
            Trait::Finesse,
            Trait::Instinct,
            Trait::Presence,
            Trait::Knowledge,
        ]
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's trait scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitScores {
    pub agility: i32,
    pub strength: i32,
    pub finesse: i32,
    pub instinct: i32,
    pub presence: i32,
    pub knowledge: i32,
}

impl TraitScores {
    pub fn get(&self, t: Trait) -> i32 {
        match t {
            Trait::Agility => self.agility,
            Trait::Strength => self.strength,
            Trait::Finesse => self.finesse,
            Trait::Instinct => self.instinct,
            Trait::Presence => self.presence,
            Trait::Knowledge => self.knowledge,
        }
    }

    pub fn set(&mut self, t: Trait, score: i32) {
        match t {
            Trait::Agility => self.agility = score,
            Trait::Strength => self.strength = score,
            Trait::Finesse => self.finesse = score,
            Trait::Instinct => self.instinct = score,
            Trait::Presence => self.presence = score,
            Trait::Knowledge => self.knowledge = score,
        }
    }

    pub fn with(mut self, t: Trait, score: i32) -> Self {
        self.set(t, score);
        self
    }
}

/// Accumulated per-trait bonuses. Every trait is always present, default 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraitBonuses {
    pub agility: i32,
    pub strength: i32,
    pub finesse: i32,
    pub instinct: i32,
    pub presence: i32,
    pub knowledge: i32,
}

impl TraitBonuses {
    pub fn get(&self, t: Trait) -> i32 {
        match t {
            Trait::Agility => self.agility,
            Trait::Strength => self.strength,
            Trait::Finesse => self.finesse,
            Trait::Instinct => self.instinct,
            Trait::Presence => self.presence,
            Trait::Knowledge => self.knowledge,
        }
    }

    pub fn add(&mut self, t: Trait, amount: i32) {
        match t {
            Trait::Agility => self.agility += amount,
            Trait::Strength => self.strength += amount,
            Trait::Finesse => self.finesse += amount,
            Trait::Instinct => self.instinct += amount,
            Trait::Presence => self.presence += amount,
            Trait::Knowledge => self.knowledge += amount,
        }
    }
}
