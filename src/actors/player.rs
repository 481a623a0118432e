//! The player character

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::combat::{roll_melee, DamageResult, Mitigation, Roller, Technique, SPECIAL, SPELL};
use crate::error::{GameError, GameResult};

use super::item::{EffectOutcome, Item, Slot};
use super::stats::StatBlock;
use super::Combatant;

/// Gold a fresh character starts with
pub const STARTING_GOLD: u32 = 50;

/// Playable classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    #[default]
    Warrior,
    Mage,
    Healer,
}

impl CharacterClass {
    /// Parse a class name, falling back to Warrior
    pub fn parse_or_default(s: &str) -> CharacterClass {
        s.parse().unwrap_or_default()
    }

    /// Starting stats for a fresh character of this class
    pub fn starting_stats(&self) -> StatBlock {
        let base = StatBlock::default();
        match self {
            CharacterClass::Warrior => base,
            CharacterClass::Mage => StatBlock::new(base.hp, base.attack, base.magic + 10),
            // The +30 hp bonus is clamped to MAX_HP
            CharacterClass::Healer => StatBlock::new(base.hp + 30, base.attack, base.magic + 5),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(CharacterClass::Warrior),
            "mage" => Ok(CharacterClass::Mage),
            "healer" => Ok(CharacterClass::Healer),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Healer => "Healer",
        };
        write!(f, "{}", s)
    }
}

/// Result of using an inventory item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemUse {
    /// A consumable was applied and removed from the inventory
    Consumed { item: Item, outcome: EffectOutcome },
    /// Gear was equipped; the displaced piece went back to the inventory
    Equipped { item: String, replaced: Option<String> },
}

/// A player character and everything it owns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub class: CharacterClass,
    pub stats: StatBlock,
    pub gold: u32,
    pub inventory: Vec<Item>,
    pub skills: BTreeSet<String>,
    pub equipment: BTreeMap<Slot, Item>,
}

impl Player {
    /// Create a fresh character
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            name: name.into(),
            class,
            stats: class.starting_stats(),
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            skills: BTreeSet::new(),
            equipment: BTreeMap::new(),
        }
    }

    /// Basic weapon blow. A dead player does nothing.
    pub fn attack_target<T: Combatant + ?Sized>(
        &self,
        target: &mut T,
        rng: &mut impl Roller,
    ) -> DamageResult {
        if !self.is_alive() {
            return DamageResult::none();
        }
        let mut result = DamageResult::new(roll_melee(self.stats.attack, rng), Mitigation::Normal);
        result.applied = target.take_damage(result.final_damage);
        result
    }

    /// Cast a spell (3 magic, 10-20 damage)
    pub fn cast_spell<T: Combatant + ?Sized>(
        &mut self,
        target: &mut T,
        rng: &mut impl Roller,
    ) -> GameResult<DamageResult> {
        self.use_technique(&SPELL, target, rng)
    }

    /// Special attack (5 magic, 25-40 damage)
    pub fn special_attack<T: Combatant + ?Sized>(
        &mut self,
        target: &mut T,
        rng: &mut impl Roller,
    ) -> GameResult<DamageResult> {
        self.use_technique(&SPECIAL, target, rng)
    }

    /// Pay for and resolve a technique. On failure neither magic nor the
    /// target changes and no roll is drawn.
    pub fn use_technique<T: Combatant + ?Sized>(
        &mut self,
        technique: &Technique,
        target: &mut T,
        rng: &mut impl Roller,
    ) -> GameResult<DamageResult> {
        if !self.is_alive() {
            return Err(GameError::Incapacitated(self.name.clone()));
        }
        self.stats.spend_magic(technique.cost)?;
        let mut result = DamageResult::new(technique.range.roll(rng), Mitigation::Normal);
        result.applied = target.take_damage(result.final_damage);
        Ok(result)
    }

    /// Add an item to the end of the inventory
    pub fn add_item(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Put gear into its slot, returning whatever it displaced.
    /// Consumables are returned unchanged.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, Item> {
        match item.kind.slot() {
            Some(slot) => Ok(self.equipment.insert(slot, item)),
            None => Err(item),
        }
    }

    /// Item currently in a slot
    pub fn equipped(&self, slot: Slot) -> Option<&Item> {
        self.equipment.get(&slot)
    }

    /// Use the inventory item at `index`: consumables apply their effect and
    /// are removed, gear is equipped.
    pub fn use_item(&mut self, index: usize) -> GameResult<ItemUse> {
        if !self.is_alive() {
            return Err(GameError::Incapacitated(self.name.clone()));
        }
        if index >= self.inventory.len() {
            return Err(GameError::ItemNotFound(index));
        }

        let item = self.inventory.remove(index);
        let name = item.name.clone();
        match self.equip(item) {
            Ok(replaced) => {
                let replaced_name = replaced.as_ref().map(|r| r.name.clone());
                if let Some(old) = replaced {
                    self.inventory.push(old);
                }
                Ok(ItemUse::Equipped {
                    item: name,
                    replaced: replaced_name,
                })
            }
            Err(consumable) => {
                let outcome = consumable.effect.apply(&mut self.stats);
                Ok(ItemUse::Consumed {
                    item: consumable,
                    outcome,
                })
            }
        }
    }

    /// Learn a skill, returning false if already known
    pub fn learn_skill(&mut self, skill: impl Into<String>) -> bool {
        self.skills.insert(skill.into())
    }
}

impl Combatant for Player {
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
