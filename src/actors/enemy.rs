//! Scripted opponents

use crate::combat::{roll_melee, DamageResult, Mitigation, Roller};

use super::stats::StatBlock;
use super::Combatant;

/// Name used for every generated enemy
pub const GOBLIN: &str = "Goblin";

/// Generated enemy hp range
const SPAWN_HP: (i32, i32) = (20, 50);

/// Generated enemy attack range
const SPAWN_ATTACK: (i32, i32) = (5, 15);

/// A non-leveling opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    stats: StatBlock,
}

impl Enemy {
    /// Create an enemy with fixed hp and attack
    pub fn new(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self {
            name: name.into(),
            stats: StatBlock::new(hp, attack, 0),
        }
    }

    /// Generate a dungeon goblin with random hp and attack
    pub fn spawn(rng: &mut impl Roller) -> Self {
        let hp = rng.roll(SPAWN_HP.0, SPAWN_HP.1).max(1) as u32;
        let attack = rng.roll(SPAWN_ATTACK.0, SPAWN_ATTACK.1).max(0) as u32;
        Self::new(GOBLIN, hp, attack)
    }

    /// Fixed attack stat
    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    /// Strike a target. A dead enemy does nothing.
    pub fn attack_target<T: Combatant + ?Sized>(
        &self,
        target: &mut T,
        mitigation: Mitigation,
        rng: &mut impl Roller,
    ) -> DamageResult {
        if !self.is_alive() {
            return DamageResult::none();
        }
        let mut result = DamageResult::new(roll_melee(self.stats.attack, rng), mitigation);
        result.applied = target.take_damage(result.final_damage);
        tracing::debug!(
            "{} attacks {} for {} damage",
            self.name,
            target.name(),
            result.applied
        );
        result
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn stats(&self) -> &StatBlock {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }
}
