//! Dungeon runs
//!
//! A run is `size` encounters in a row (size 3-5, rolled at creation), each
//! against a freshly spawned goblin. The first defeat fails the whole run.
//! Clearing every level pays 100 gold and 20 experience once, at the end.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::actors::{Combatant, Enemy, Player};
use crate::combat::{fight, ActionSource, EncounterState, FightSummary, Roller};

/// Fewest levels a dungeon can have
pub const MIN_SIZE: u32 = 3;

/// Most levels a dungeon can have
pub const MAX_SIZE: u32 = 5;

/// Gold paid for clearing a dungeon
pub const COMPLETION_GOLD: u32 = 100;

/// Experience paid for clearing a dungeon
pub const COMPLETION_EXPERIENCE: u32 = 20;

/// Dungeon difficulty label. Only shown to the player; it does not change
/// enemy generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", s)
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every level cleared
    Completed,
    /// The player fell
    Failed,
    /// The player walked away between turns
    Abandoned,
}

/// Result of a run, for the shell to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub difficulty: Difficulty,
    pub size: u32,
    pub levels_cleared: u32,
    pub gold_reward: u32,
    pub experience_reward: u32,
    /// One entry per level entered
    pub fights: Vec<FightSummary>,
}

/// A dungeon traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonRun {
    difficulty: Difficulty,
    size: u32,
    levels_cleared: u32,
    /// Set once the run is Completed or Failed
    finished: Option<RunOutcome>,
}

impl DungeonRun {
    /// Create a run with a random size in 3..=5
    pub fn new(difficulty: Difficulty, rng: &mut impl Roller) -> Self {
        let size = rng
            .roll(MIN_SIZE as i32, MAX_SIZE as i32)
            .clamp(MIN_SIZE as i32, MAX_SIZE as i32) as u32;
        Self::with_size(difficulty, size)
    }

    /// Create a run with a fixed number of levels
    pub fn with_size(difficulty: Difficulty, size: u32) -> Self {
        Self {
            difficulty,
            size,
            levels_cleared: 0,
            finished: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }

    /// Final outcome, once the run is over. Abandoned runs stay open.
    pub fn finished(&self) -> Option<RunOutcome> {
        self.finished
    }

    /// Fight through the remaining levels. A finished run reports its
    /// outcome again without fighting or paying anything.
    pub fn explore(
        &mut self,
        player: &mut Player,
        source: &mut impl ActionSource,
        rng: &mut impl Roller,
    ) -> RunReport {
        if let Some(outcome) = self.finished {
            debug!("{} revisits a finished dungeon ({:?})", player.name, outcome);
            return self.report(outcome, Vec::new(), (0, 0));
        }
        info!(
            "{} enters a {}-level dungeon ({} levels)",
            player.name, self.difficulty, self.size
        );
        let mut fights = Vec::new();

        let outcome = loop {
            if !player.is_alive() {
                break RunOutcome::Failed;
            }
            if self.levels_cleared >= self.size {
                break RunOutcome::Completed;
            }

            let enemy = Enemy::spawn(rng);
            debug!(
                "level {} of {}: {} (hp {}, attack {})",
                self.levels_cleared + 1,
                self.size,
                enemy.name(),
                enemy.stats().hp,
                enemy.attack()
            );
            let summary = fight(player, enemy, source, rng);
            let state = summary.state;
            let abandoned = summary.abandoned;
            fights.push(summary);

            if abandoned {
                break RunOutcome::Abandoned;
            }
            match state {
                EncounterState::PlayerVictory => self.levels_cleared += 1,
                EncounterState::PlayerDefeat => break RunOutcome::Failed,
                EncounterState::Ongoing => break RunOutcome::Abandoned,
            }
        };

        let (gold_reward, experience_reward) = if outcome == RunOutcome::Completed {
            player.gold = player.gold.saturating_add(COMPLETION_GOLD);
            // The reward does not trigger a level-up check
            player.stats.experience = player.stats.experience.saturating_add(COMPLETION_EXPERIENCE);
            info!("{} has conquered the dungeon", player.name);
            (COMPLETION_GOLD, COMPLETION_EXPERIENCE)
        } else {
            info!(
                "{} left the dungeon after {} of {} levels ({:?})",
                player.name, self.levels_cleared, self.size, outcome
            );
            (0, 0)
        };

        if outcome != RunOutcome::Abandoned {
            self.finished = Some(outcome);
        }
        self.report(outcome, fights, (gold_reward, experience_reward))
    }

    fn report(
        &self,
        outcome: RunOutcome,
        fights: Vec<FightSummary>,
        (gold_reward, experience_reward): (u32, u32),
    ) -> RunReport {
        RunReport {
            outcome,
            difficulty: self.difficulty,
            size: self.size,
            levels_cleared: self.levels_cleared,
            gold_reward,
            experience_reward,
            fights,
        }
    }
}
