//! Combat participants
//!
//! Players and enemies share the [`Combatant`] capability: a name, a
//! [`StatBlock`], and damage/heal operations that respect `alive == hp > 0`.

mod enemy;
mod item;
mod player;
mod stats;

pub use enemy::{Enemy, GOBLIN};
pub use item::{EffectOutcome, Item, ItemEffect, ItemKind, Slot, HEALING_POTION};
pub use player::{CharacterClass, ItemUse, Player, STARTING_GOLD};
pub use stats::{StatBlock, MAX_HP, MAX_LEVEL, MAX_MAGIC};

/// Anything that can be hit in combat
pub trait Combatant {
    /// Display name
    fn name(&self) -> &str;

    /// Current attributes
    fn stats(&self) -> &StatBlock;

    /// Mutable attributes
    fn stats_mut(&mut self) -> &mut StatBlock;

    /// Alive iff hp > 0
    fn is_alive(&self) -> bool {
        self.stats().is_alive()
    }

    /// Take damage, returning hp actually lost
    fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = self.stats_mut().take_damage(amount);
        if applied > 0 && !self.is_alive() {
            tracing::debug!("{} has fallen", self.name());
        }
        applied
    }

    /// Heal, returning hp actually restored
    fn heal(&mut self, amount: u32) -> u32 {
        self.stats_mut().heal(amount)
    }
}
