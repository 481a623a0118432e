//! Items, their effects and equipment slots

use serde::{Deserialize, Serialize};

use super::stats::StatBlock;

/// Name of the potion sold in town
pub const HEALING_POTION: &str = "Healing Potion";

/// Hit points restored by a healing potion
pub const HEALING_POTION_AMOUNT: u32 = 30;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

impl ItemKind {
    /// Equipment slot this kind occupies, if any
    pub fn slot(&self) -> Option<Slot> {
        match self {
            ItemKind::Weapon => Some(Slot::Weapon),
            ItemKind::Armor => Some(Slot::Armor),
            ItemKind::Consumable => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Consumable => "consumable",
        };
        write!(f, "{}", s)
    }
}

/// Equipment slot, at most one item each
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Weapon,
    Armor,
}

/// What an item does when used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "effect", content = "amount")]
pub enum ItemEffect {
    /// No effect on use
    None,
    /// Restore hit points
    Heal(u32),
    /// Restore magic
    RestoreMagic(u32),
}

/// What an applied effect changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    Nothing,
    Healed(u32),
    MagicRestored(u32),
}

impl ItemEffect {
    /// Apply to a stat block
    pub fn apply(&self, stats: &mut StatBlock) -> EffectOutcome {
        match *self {
            ItemEffect::None => EffectOutcome::Nothing,
            ItemEffect::Heal(amount) => EffectOutcome::Healed(stats.heal(amount)),
            ItemEffect::RestoreMagic(amount) => {
                EffectOutcome::MagicRestored(stats.restore_magic(amount))
            }
        }
    }
}

/// An inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    pub effect: ItemEffect,
}

impl Item {
    /// Create a new item
    pub fn new(name: impl Into<String>, kind: ItemKind, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            kind,
            effect,
        }
    }

    /// The stock consumable
    pub fn healing_potion() -> Self {
        Self::new(
            HEALING_POTION,
            ItemKind::Consumable,
            ItemEffect::Heal(HEALING_POTION_AMOUNT),
        )
    }

    /// A piece of gear with no use effect
    pub fn gear(name: impl Into<String>, kind: ItemKind) -> Self {
        Self::new(name, kind, ItemEffect::None)
    }
}
