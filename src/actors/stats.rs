//! Primitive attribute container shared by every combatant

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Hit point ceiling for every actor
pub const MAX_HP: u32 = 100;

/// Magic pool ceiling
pub const MAX_MAGIC: u32 = 20;

/// Highest attainable level
pub const MAX_LEVEL: u32 = 10;

/// Core combat attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    /// Current hit points, 0 means incapacitated
    pub hp: u32,
    /// Base melee power
    pub attack: u32,
    /// Castable resource
    pub magic: u32,
    /// Character level, starts at 1
    pub level: u32,
    /// Experience towards the next level
    pub experience: u32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            hp: MAX_HP,
            attack: 10,
            magic: 5,
            level: 1,
            experience: 0,
        }
    }
}

impl StatBlock {
    /// Create a stat block, clamping every field into its domain
    pub fn new(hp: u32, attack: u32, magic: u32) -> Self {
        Self {
            hp: hp.min(MAX_HP),
            attack,
            magic: magic.min(MAX_MAGIC),
            level: 1,
            experience: 0,
        }
    }

    /// Alive iff hp > 0
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Apply damage, returning the amount actually removed.
    /// Dead actors take nothing.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    /// Restore hp up to MAX_HP, returning the amount actually restored.
    /// Dead actors cannot be healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let restored = amount.min(MAX_HP.saturating_sub(self.hp));
        self.hp += restored;
        restored
    }

    /// Pay `cost` magic, or fail leaving the pool untouched
    pub fn spend_magic(&mut self, cost: u32) -> GameResult<()> {
        if self.magic < cost {
            return Err(GameError::InsufficientResource {
                needed: cost,
                available: self.magic,
            });
        }
        self.magic -= cost;
        Ok(())
    }

    /// Refill magic up to MAX_MAGIC, returning the amount actually restored
    pub fn restore_magic(&mut self, amount: u32) -> u32 {
        let restored = amount.min(MAX_MAGIC.saturating_sub(self.magic));
        self.magic += restored;
        restored
    }
}
