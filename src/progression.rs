//! Experience and leveling rules
//!
//! A player levels up when `experience >= level * 10`. The check runs once per
//! experience grant and advances at most one level, even if the new total
//! would satisfy the next threshold too.

use tracing::info;

use crate::actors::{Player, MAX_HP, MAX_LEVEL};

/// Experience granted for winning a fight
pub const VICTORY_EXPERIENCE: u32 = 5;

/// Attack gained per level
pub const ATTACK_PER_LEVEL: u32 = 5;

/// Magic gained per level (capped at MAX_MAGIC)
pub const MAGIC_PER_LEVEL: u32 = 2;

/// A level gained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    /// Level reached
    pub level: u32,
    /// Attack after the level-up
    pub attack: u32,
    /// Magic after the level-up
    pub magic: u32,
}

/// Experience needed to leave `level`
pub fn threshold(level: u32) -> u32 {
    level.saturating_mul(10)
}

/// Run a single level-up check
pub fn check_level_up(player: &mut Player) -> Option<LevelUp> {
    let stats = &mut player.stats;
    if stats.level >= MAX_LEVEL || stats.experience < threshold(stats.level) {
        return None;
    }

    stats.level += 1;
    stats.attack += ATTACK_PER_LEVEL;
    stats.restore_magic(MAGIC_PER_LEVEL);
    stats.hp = MAX_HP;
    stats.experience = 0;

    info!("{} has leveled up to level {}", player.name, stats.level);
    Some(LevelUp {
        level: stats.level,
        attack: stats.attack,
        magic: stats.magic,
    })
}

/// Add experience and run the level-up check once
pub fn grant_experience(player: &mut Player, amount: u32) -> Option<LevelUp> {
    player.stats.experience = player.stats.experience.saturating_add(amount);
    check_level_up(player)
}
