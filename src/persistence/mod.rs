//! Character persistence
//!
//! Characters are saved as [`SaveRecord`] snapshots keyed by name through the
//! [`SaveStore`] trait:
//! - `SqliteSaveStore` for real sessions
//! - `MemorySaveStore` for tests and throwaway sessions
//!
//! A save replaces the previous record for the name in one step, so a reader
//! sees either the old snapshot or the new one.

mod memory;
mod sqlite;

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::actors::{CharacterClass, Item, Player, Slot, StatBlock, MAX_HP, MAX_LEVEL, MAX_MAGIC};
use crate::error::{GameError, GameResult};

pub use memory::MemorySaveStore;
pub use sqlite::SqliteSaveStore;

/// Current save format version
pub const SAVE_VERSION: u32 = 1;

/// Character names: a letter, then letters, digits, spaces, `_` or `-`
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9 _-]{0,31}$").unwrap());

/// Validate and normalize a character name (trimmed)
pub fn validate_name(name: &str) -> GameResult<String> {
    let trimmed = name.trim();
    if NAME_REGEX.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(GameError::InvalidName(name.to_string()))
    }
}

/// Full snapshot of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub name: String,
    pub class: CharacterClass,
    pub stats: StatBlock,
    pub gold: u32,
    pub inventory: Vec<Item>,
    pub skills: BTreeSet<String>,
    pub equipment: BTreeMap<Slot, Item>,
}

impl SaveRecord {
    /// Rebuild the player
    pub fn into_player(self) -> Player {
        Player {
            name: self.name,
            class: self.class,
            stats: self.stats,
            gold: self.gold,
            inventory: self.inventory,
            skills: self.skills,
            equipment: self.equipment,
        }
    }

    /// Encode as JSON
    pub fn to_json(&self) -> GameResult<String> {
        serde_json::to_string(self).map_err(|e| GameError::CorruptRecord {
            name: self.name.clone(),
            reason: e.to_string(),
        })
    }

    /// Decode from JSON, rejecting other format versions
    pub fn from_json(name: &str, json: &str) -> GameResult<Self> {
        let record: SaveRecord =
            serde_json::from_str(json).map_err(|e| GameError::CorruptRecord {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        if record.version != SAVE_VERSION {
            return Err(GameError::CorruptRecord {
                name: name.to_string(),
                reason: format!(
                    "save version {} is not supported (expected {})",
                    record.version, SAVE_VERSION
                ),
            });
        }
        if let Some(reason) = record.stats_violation() {
            return Err(GameError::CorruptRecord {
                name: name.to_string(),
                reason,
            });
        }
        Ok(record)
    }

    /// Describe the first stat outside its bounds, if any
    fn stats_violation(&self) -> Option<String> {
        let stats = &self.stats;
        if stats.hp > MAX_HP {
            Some(format!("hp {} exceeds {}", stats.hp, MAX_HP))
        } else if stats.magic > MAX_MAGIC {
            Some(format!("magic {} exceeds {}", stats.magic, MAX_MAGIC))
        } else if !(1..=MAX_LEVEL).contains(&stats.level) {
            Some(format!("level {} is outside 1-{}", stats.level, MAX_LEVEL))
        } else {
            None
        }
    }
}

impl From<&Player> for SaveRecord {
    fn from(player: &Player) -> Self {
        Self {
            version: SAVE_VERSION,
            name: player.name.clone(),
            class: player.class,
            stats: player.stats,
            gold: player.gold,
            inventory: player.inventory.clone(),
            skills: player.skills.clone(),
            equipment: player.equipment.clone(),
        }
    }
}

/// Keyed storage for save records
pub trait SaveStore {
    /// Write `record` under its name, replacing any previous record
    fn save(&self, record: &SaveRecord) -> impl Future<Output = GameResult<()>> + Send;

    /// Fetch the record for `name`, if any
    fn load(&self, name: &str) -> impl Future<Output = GameResult<Option<SaveRecord>>> + Send;

    /// Remove the record for `name`, returning whether one existed
    fn delete(&self, name: &str) -> impl Future<Output = GameResult<bool>> + Send;

    /// Names with a saved record, sorted
    fn list(&self) -> impl Future<Output = GameResult<Vec<String>>> + Send;
}

/// Snapshot and save a player. The name must already be in canonical
/// (trimmed) form so that loading returns an identical player.
pub async fn save_player<S: SaveStore>(store: &S, player: &Player) -> GameResult<()> {
    if validate_name(&player.name)? != player.name {
        return Err(GameError::InvalidName(player.name.clone()));
    }
    let record = SaveRecord::from(player);
    store.save(&record).await?;
    info!("Saved {} (level {})", record.name, record.stats.level);
    Ok(())
}

/// Load a player, or `RecordNotFound`
pub async fn load_player<S: SaveStore>(store: &S, name: &str) -> GameResult<Player> {
    let name = validate_name(name)?;
    match store.load(&name).await? {
        Some(record) => {
            info!("Loaded {} (level {})", record.name, record.stats.level);
            Ok(record.into_player())
        }
        None => Err(GameError::RecordNotFound(name)),
    }
}

/// Load a player, falling back to a fresh character when no save exists.
/// Returns the player and whether it came from a save.
pub async fn load_or_create<S: SaveStore>(
    store: &S,
    name: &str,
    class: CharacterClass,
) -> GameResult<(Player, bool)> {
    match load_player(store, name).await {
        Ok(player) => Ok((player, true)),
        Err(GameError::RecordNotFound(name)) => {
            warn!("No save file found for {}. Starting fresh.", name);
            Ok((Player::new(name, class), false))
        }
        Err(err) => Err(err),
    }
}
