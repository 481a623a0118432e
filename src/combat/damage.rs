//! Damage formulas and mitigation
//!
//! - Basic attacks roll `attack ± 2`
//! - Spells cost 3 magic and roll 10-20
//! - Special attacks cost 5 magic and roll 25-40
//! - Defending halves the incoming blow (rounded down)

use serde::{Deserialize, Serialize};

use super::dice::{RollRange, Roller};

/// Spread either side of the attack stat for weapon blows
pub const MELEE_SPREAD: i32 = 2;

/// A magic-fuelled attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technique {
    /// Display name used in combat messages
    pub name: &'static str,
    /// Magic consumed on use
    pub cost: u32,
    /// Damage range
    pub range: RollRange,
}

/// Spell cast
pub const SPELL: Technique = Technique {
    name: "spell",
    cost: 3,
    range: RollRange::new(10, 20),
};

/// Special attack
pub const SPECIAL: Technique = Technique {
    name: "special attack",
    cost: 5,
    range: RollRange::new(25, 40),
};

/// Damage range of a plain blow with the given attack stat
pub fn melee_range(attack: u32) -> RollRange {
    RollRange::around(attack, MELEE_SPREAD)
}

/// Roll a plain blow
pub fn roll_melee(attack: u32, rng: &mut impl Roller) -> u32 {
    melee_range(attack).roll(rng)
}

/// Reduction applied to an incoming blow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Mitigation {
    /// Full damage
    #[default]
    Normal,
    /// Defending - takes 50% damage (rounded down)
    Guarded,
}

impl Mitigation {
    /// Apply this mitigation to a damage amount
    pub fn apply(&self, damage: u32) -> u32 {
        match self {
            Mitigation::Normal => damage,
            Mitigation::Guarded => damage / 2,
        }
    }

    /// Damage taken as a percentage
    pub fn percentage(&self) -> u32 {
        match self {
            Mitigation::Normal => 100,
            Mitigation::Guarded => 50,
        }
    }
}

/// Result of one blow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    /// Rolled damage before mitigation
    pub base_damage: u32,
    /// Damage after mitigation
    pub final_damage: u32,
    /// Mitigation in effect
    pub mitigation: Mitigation,
    /// Hit points the target actually lost
    pub applied: u32,
}

impl DamageResult {
    /// Compute mitigated damage for a roll; `applied` is filled in by the target
    pub fn new(base: u32, mitigation: Mitigation) -> Self {
        Self {
            base_damage: base,
            final_damage: mitigation.apply(base),
            mitigation,
            applied: 0,
        }
    }

    /// A blow that never happened (dead attacker, forfeited action)
    pub fn none() -> Self {
        Self::new(0, Mitigation::Normal)
    }
}
