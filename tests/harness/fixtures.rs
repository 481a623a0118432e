//! Characters and save stores for tests

use std::path::PathBuf;

use anyhow::{Context, Result};
use isekai::actors::{CharacterClass, Item, ItemKind, Player};
use isekai::persistence::SqliteSaveStore;
use tempfile::TempDir;

/// A fresh Warrior: hp 100, attack 10, magic 5
pub fn hero() -> Player {
    Player::new("Kazuma", CharacterClass::Warrior)
}

/// A Mage with some history: levels, gold, gear and a skill
pub fn veteran() -> Player {
    let mut player = Player::new("Megumin", CharacterClass::Mage);
    player.stats.level = 6;
    player.stats.experience = 17;
    player.stats.hp = 64;
    player.gold = 410;
    player.add_item(Item::healing_potion());
    player.add_item(Item::healing_potion());
    player.add_item(Item::gear("Chainmail", ItemKind::Armor));
    player.learn_skill("Sword Mastery");
    player
        .equip(Item::gear("Manatite Staff", ItemKind::Weapon))
        .expect("staff is gear");
    player
}

/// A save database in a temporary directory, removed on drop
pub struct TestSaves {
    dir: TempDir,
    pub store: SqliteSaveStore,
}

impl TestSaves {
    pub async fn open() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp dir")?;
        let store = Self::open_store(&dir.path().join("saves.db")).await?;
        Ok(Self { dir, store })
    }

    /// Path of the database file
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("saves.db")
    }

    /// A second, independent connection pool on the same file
    pub async fn reopen(&self) -> Result<SqliteSaveStore> {
        Self::open_store(&self.path()).await
    }

    async fn open_store(path: &std::path::Path) -> Result<SqliteSaveStore> {
        let path = path.to_str().context("Non-UTF-8 temp path")?;
        Ok(SqliteSaveStore::open(Some(path)).await?)
    }
}
