//! Death move resolution.
//!
//! When a character's HP reaches zero they choose one of three death moves.
//! Blaze of Glory is deterministic; the other two ride on d12 rolls. The
//! dice come from a caller-supplied [`rand::Rng`] so resolution stays a pure
//! function of its inputs under test; each branch also has a deterministic
//! core that takes the die values directly.
//!
//! The engine only reports the outcome. Applying it (marking the character
//! dead or unconscious, clearing HP and Stress, adjusting Hope) is the
//! caller's job.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel value for `hp_cleared` / `stress_cleared` meaning "clear all."
pub const CLEAR_ALL: i32 = 999;

/// The three death moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathMove {
    BlazeOfGlory,
    AvoidDeath,
    RiskItAll,
}

impl DeathMove {
    pub fn name(&self) -> &'static str {
        match self {
            DeathMove::BlazeOfGlory => "Blaze of Glory",
            DeathMove::AvoidDeath => "Avoid Death",
            DeathMove::RiskItAll => "Risk It All",
        }
    }

    pub fn all() -> [DeathMove; 3] {
        [
            DeathMove::BlazeOfGlory,
            DeathMove::AvoidDeath,
            DeathMove::RiskItAll,
        ]
    }
}

impl std::fmt::Display for DeathMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of one resolved death move.
///
/// Immutable once finalized: a Risk It All success that needs allocation is
/// finalized by [`allocate`](DeathMoveResult::allocate), which returns a
/// replacement result rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathMoveResult {
    pub move_type: DeathMove,
    pub survived: bool,
    pub gained_scar: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hope_die: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear_die: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_cleared: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_cleared: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearing_value: Option<i32>,
    #[serde(default)]
    pub needs_allocation: bool,
    pub description: String,
}

/// Allocation of a Risk It All clearing value went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("this death move result has nothing to allocate")]
    NothingToAllocate,
    #[error("cannot allocate {requested} HP from a clearing value of {available}")]
    OutOfRange { requested: i32, available: i32 },
}

impl DeathMoveResult {
    /// Finalize a Risk It All success by splitting the clearing value
    /// between HP and Stress. `stress = clearing_value - hp_allocation`, so
    /// the two always sum exactly to the clearing value.
    pub fn allocate(&self, hp_allocation: i32) -> Result<DeathMoveResult, AllocationError> {
        if !self.needs_allocation {
            return Err(AllocationError::NothingToAllocate);
        }
        let available = self.clearing_value.unwrap_or(0);
        if hp_allocation < 0 || hp_allocation > available {
            return Err(AllocationError::OutOfRange {
                requested: hp_allocation,
                available,
            });
        }
        let mut confirmed = self.clone();
        confirmed.needs_allocation = false;
        confirmed.hp_cleared = Some(hp_allocation);
        confirmed.stress_cleared = Some(available - hp_allocation);
        Ok(confirmed)
    }
}

fn roll_d12<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(1..=12)
}

/// Resolve a death move, rolling any dice with `rng`.
pub fn resolve_death_move<R: Rng>(
    move_type: DeathMove,
    character_level: i32,
    rng: &mut R,
) -> DeathMoveResult {
    match move_type {
        DeathMove::BlazeOfGlory => blaze_of_glory(),
        DeathMove::AvoidDeath => avoid_death(character_level, roll_d12(rng)),
        DeathMove::RiskItAll => risk_it_all(roll_d12(rng), roll_d12(rng)),
    }
}

/// Blaze of Glory: no dice. The character takes one last, automatically
/// critical action and then crosses through death's door.
pub fn blaze_of_glory() -> DeathMoveResult {
    DeathMoveResult {
        move_type: DeathMove::BlazeOfGlory,
        survived: false,
        gained_scar: false,
        hope_die: None,
        fear_die: None,
        hp_cleared: None,
        stress_cleared: None,
        clearing_value: None,
        needs_allocation: false,
        description: "You embrace death and go out in a blaze of glory. Take one final action; \
                      it automatically critically succeeds. Then you cross through death's door."
            .to_string(),
    }
}

/// Avoid Death: the character always survives, falling unconscious. Rolling
/// the Hope die at or below the character's level leaves a scar.
pub fn avoid_death(character_level: i32, hope_die: u32) -> DeathMoveResult {
    let gained_scar = hope_die as i32 <= character_level;
    let description = if gained_scar {
        format!(
            "You avoid death and fall unconscious, but the Hope die came up {hope_die} \
             (at or below your level) and the experience leaves a scar."
        )
    } else {
        format!(
            "You avoid death and fall unconscious. The Hope die came up {hope_die}; \
             you escape without a scar."
        )
    };
    DeathMoveResult {
        move_type: DeathMove::AvoidDeath,
        survived: true,
        gained_scar,
        hope_die: Some(hope_die),
        fear_die: None,
        hp_cleared: None,
        stress_cleared: None,
        clearing_value: None,
        needs_allocation: false,
        description,
    }
}

/// Risk It All: roll the Hope and Fear dice. Matching dice are a critical
/// success clearing all HP and Stress; Hope above Fear survives with a
/// clearing value to split; Hope below Fear is death.
pub fn risk_it_all(hope_die: u32, fear_die: u32) -> DeathMoveResult {
    // Equal dice are the sole critical-success condition, regardless of how
    // the rolls were produced.
    if hope_die == fear_die {
        DeathMoveResult {
            move_type: DeathMove::RiskItAll,
            survived: true,
            gained_scar: false,
            hope_die: Some(hope_die),
            fear_die: Some(fear_die),
            hp_cleared: Some(CLEAR_ALL),
            stress_cleared: Some(CLEAR_ALL),
            clearing_value: None,
            needs_allocation: false,
            description: format!(
                "Critical success! Both dice came up {hope_die}. You stand back up and \
                 clear all HP and Stress."
            ),
        }
    } else if hope_die > fear_die {
        DeathMoveResult {
            move_type: DeathMove::RiskItAll,
            survived: true,
            gained_scar: false,
            hope_die: Some(hope_die),
            fear_die: Some(fear_die),
            hp_cleared: None,
            stress_cleared: None,
            clearing_value: Some(hope_die as i32),
            needs_allocation: true,
            description: format!(
                "Hope ({hope_die}) beats Fear ({fear_die}). You survive; split {hope_die} \
                 points between HP and Stress to clear."
            ),
        }
    } else {
        DeathMoveResult {
            move_type: DeathMove::RiskItAll,
            survived: false,
            gained_scar: false,
            hope_die: Some(hope_die),
            fear_die: Some(fear_die),
            hp_cleared: None,
            stress_cleared: None,
            clearing_value: None,
            needs_allocation: false,
            description: format!(
                "Fear ({fear_die}) overtakes Hope ({hope_die}). You cross through death's door."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_blaze_of_glory() {
        let result = blaze_of_glory();
        assert!(!result.survived);
        assert!(!result.gained_scar);
        assert_eq!(result.hope_die, None);
        assert_eq!(result.fear_die, None);
        assert!(!result.needs_allocation);
    }

    #[test]
    fn test_avoid_death_scar_boundary() {
        // Roll equal to level scars (<=); one above does not.
        let at_level = avoid_death(5, 5);
        assert!(at_level.survived);
        assert!(at_level.gained_scar);

        let above_level = avoid_death(5, 6);
        assert!(above_level.survived);
        assert!(!above_level.gained_scar);
    }

    #[test]
    fn test_avoid_death_always_survives() {
        for roll in 1..=12 {
            assert!(avoid_death(0, roll).survived);
            assert!(avoid_death(10, roll).survived);
        }
    }

    #[test]
    fn test_risk_it_all_critical() {
        let result = risk_it_all(7, 7);
        assert!(result.survived);
        assert_eq!(result.hp_cleared, Some(CLEAR_ALL));
        assert_eq!(result.stress_cleared, Some(CLEAR_ALL));
        assert!(!result.needs_allocation);
        assert_eq!(result.clearing_value, None);
    }

    #[test]
    fn test_risk_it_all_non_critical_success() {
        let result = risk_it_all(8, 3);
        assert!(result.survived);
        assert_eq!(result.clearing_value, Some(8));
        assert!(result.needs_allocation);
        assert_eq!(result.hp_cleared, None);
        assert_eq!(result.stress_cleared, None);
    }

    #[test]
    fn test_risk_it_all_failure() {
        let result = risk_it_all(2, 9);
        assert!(!result.survived);
        assert_eq!(result.clearing_value, None);
        assert_eq!(result.hp_cleared, None);
        assert_eq!(result.stress_cleared, None);
        assert!(!result.needs_allocation);
    }

    #[test]
    fn test_allocation_splits_exactly() {
        let result = risk_it_all(8, 3);
        let confirmed = result.allocate(5).unwrap();
        assert!(!confirmed.needs_allocation);
        assert_eq!(confirmed.hp_cleared, Some(5));
        assert_eq!(confirmed.stress_cleared, Some(3));
        assert_eq!(
            confirmed.hp_cleared.unwrap() + confirmed.stress_cleared.unwrap(),
            8
        );
        // The original result is untouched.
        assert!(result.needs_allocation);
    }

    #[test]
    fn test_allocation_bounds() {
        let result = risk_it_all(6, 2);
        assert!(result.allocate(0).is_ok());
        assert!(result.allocate(6).is_ok());
        assert_eq!(
            result.allocate(7),
            Err(AllocationError::OutOfRange {
                requested: 7,
                available: 6
            })
        );
        assert_eq!(
            result.allocate(-1),
            Err(AllocationError::OutOfRange {
                requested: -1,
                available: 6
            })
        );
    }

    #[test]
    fn test_allocation_requires_pending_result() {
        let result = risk_it_all(7, 7);
        assert_eq!(result.allocate(3), Err(AllocationError::NothingToAllocate));

        let confirmed = risk_it_all(8, 3).allocate(4).unwrap();
        assert_eq!(
            confirmed.allocate(4),
            Err(AllocationError::NothingToAllocate)
        );
    }

    #[test]
    fn test_resolver_die_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let result = resolve_death_move(DeathMove::RiskItAll, 3, &mut rng);
            let hope = result.hope_die.unwrap();
            let fear = result.fear_die.unwrap();
            assert!((1..=12).contains(&hope));
            assert!((1..=12).contains(&fear));
            // Branch bookkeeping stays consistent with the dice.
            if hope == fear {
                assert_eq!(result.hp_cleared, Some(CLEAR_ALL));
            } else if hope > fear {
                assert_eq!(result.clearing_value, Some(hope as i32));
            } else {
                assert!(!result.survived);
            }
        }
    }

    #[test]
    fn test_resolver_seeded_is_reproducible() {
        let first = resolve_death_move(DeathMove::AvoidDeath, 4, &mut StdRng::seed_from_u64(42));
        let second = resolve_death_move(DeathMove::AvoidDeath, 4, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
