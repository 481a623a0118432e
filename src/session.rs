//! A play session: one player, one save store
//!
//! The shell drives everything through [`Session`]; it never touches the
//! engine's rules directly.

use tracing::{info, warn};

use crate::actors::{CharacterClass, Enemy, Item, ItemUse, Player, GOBLIN};
use crate::combat::{fight, ActionSource, FightSummary, Roller};
use crate::dungeon::{Difficulty, DungeonRun, RunReport};
use crate::error::GameResult;
use crate::persistence::{load_or_create, save_player, validate_name, SaveStore};
use crate::town::Town;

/// Hit points of the goblin met while exploring
pub const WILD_GOBLIN_HP: u32 = 50;

/// Attack of the goblin met while exploring
pub const WILD_GOBLIN_ATTACK: u32 = 5;

/// Where the session's player came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Loaded,
    Fresh,
}

/// A running game
pub struct Session<S> {
    player: Player,
    store: S,
    town: Town,
}

impl<S: SaveStore> Session<S> {
    /// Start a session. With `load`, the saved character is used when one
    /// exists; otherwise a fresh character of `class` is created.
    pub async fn start(
        store: S,
        name: &str,
        class: CharacterClass,
        load: bool,
    ) -> GameResult<(Self, Origin)> {
        let name = validate_name(name)?;
        let (player, origin) = if load {
            match load_or_create(&store, &name, class).await? {
                (player, true) => (player, Origin::Loaded),
                (player, false) => (player, Origin::Fresh),
            }
        } else {
            (Player::new(name, class), Origin::Fresh)
        };
        info!("Session started for {} ({:?})", player.name, origin);

        Ok((
            Self {
                player,
                store,
                town: Town::new(),
            },
            origin,
        ))
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Wander off and fight a goblin
    pub fn explore(
        &mut self,
        source: &mut impl ActionSource,
        rng: &mut impl Roller,
    ) -> FightSummary {
        let enemy = Enemy::new(GOBLIN, WILD_GOBLIN_HP, WILD_GOBLIN_ATTACK);
        fight(&mut self.player, enemy, source, rng)
    }

    /// Enter a dungeon of random size
    pub fn enter_dungeon(
        &mut self,
        difficulty: Difficulty,
        source: &mut impl ActionSource,
        rng: &mut impl Roller,
    ) -> RunReport {
        let mut run = DungeonRun::new(difficulty, rng);
        run.explore(&mut self.player, source, rng)
    }

    /// Buy a potion in town
    pub fn visit_shop(&mut self) -> GameResult<Item> {
        self.town.shop(&mut self.player)
    }

    /// Join the guild; false if already a member
    pub fn join_guild(&mut self) -> bool {
        self.town.join_guild(&mut self.player)
    }

    /// Use an inventory item
    pub fn use_item(&mut self, index: usize) -> GameResult<ItemUse> {
        self.player.use_item(index)
    }

    /// Persist the player. A failure is returned for the shell to report;
    /// the session keeps running in memory.
    pub async fn save(&self) -> GameResult<()> {
        let result = save_player(&self.store, &self.player).await;
        if let Err(err) = &result {
            warn!("Save failed for {}: {}", self.player.name, err);
        }
        result
    }

    /// End the session, returning the player
    pub fn into_player(self) -> Player {
        self.player
    }
}
