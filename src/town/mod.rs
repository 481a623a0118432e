//! Isekai Village: the shop, the adventurers guild and wandering events

use tracing::info;

use crate::actors::{Item, Player};
use crate::combat::Roller;
use crate::error::{GameError, GameResult};

/// Price of a healing potion
pub const POTION_PRICE: u32 = 10;

/// Skill taught by the guild
pub const GUILD_SKILL: &str = "Sword Mastery";

/// The starting town
#[derive(Debug, Clone)]
pub struct Town {
    pub name: String,
    pub npcs: Vec<String>,
}

impl Default for Town {
    fn default() -> Self {
        Self {
            name: "Isekai Village".to_string(),
            npcs: vec![
                "Shopkeeper".to_string(),
                "Guild Master".to_string(),
                "Mysterious Stranger".to_string(),
            ],
        }
    }
}

impl Town {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buy a healing potion. Refused when the player cannot pay.
    pub fn shop(&self, player: &mut Player) -> GameResult<Item> {
        if player.gold < POTION_PRICE {
            return Err(GameError::InsufficientGold {
                price: POTION_PRICE,
                available: player.gold,
            });
        }
        player.gold -= POTION_PRICE;
        let potion = Item::healing_potion();
        player.add_item(potion.clone());
        info!("{} bought a {} ({} gold left)", player.name, potion.name, player.gold);
        Ok(potion)
    }

    /// Join the guild and learn its skill. Returns false if already a member.
    pub fn join_guild(&self, player: &mut Player) -> bool {
        let learned = player.learn_skill(GUILD_SKILL);
        if learned {
            info!("{} joined the Adventurers Guild", player.name);
        }
        learned
    }
}

/// Something that happens on the road. Flavor only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    TreasureChest,
    RogueThieves,
    WizardOffer,
}

impl WorldEvent {
    pub fn all() -> &'static [WorldEvent] {
        &[
            WorldEvent::TreasureChest,
            WorldEvent::RogueThieves,
            WorldEvent::WizardOffer,
        ]
    }
}

impl std::fmt::Display for WorldEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WorldEvent::TreasureChest => "You find a hidden treasure chest!",
            WorldEvent::RogueThieves => "A band of rogue thieves attacks you!",
            WorldEvent::WizardOffer => "A wizard offers to teach you a powerful spell.",
        };
        write!(f, "{}", s)
    }
}

/// Pick one of the world events uniformly
pub fn random_event(rng: &mut impl Roller) -> WorldEvent {
    let events = WorldEvent::all();
    let index = rng.roll(0, events.len() as i32 - 1).clamp(0, events.len() as i32 - 1);
    events[index as usize]
}
