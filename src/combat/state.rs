//! Encounter state machine
//!
//! One player against one enemy. Each turn is the player's action followed by
//! the enemy's retaliation unless the enemy died first:
//! - Enemy killed -> `PlayerVictory`, 5 experience, level-up check
//! - Player killed -> `PlayerDefeat`
//! - Otherwise `Ongoing`
//!
//! An unrecognized action forfeits the turn and the enemy strikes twice: once
//! as punishment, then its regular retaliation.

use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::actors::{Combatant, Enemy, Player};
use crate::error::GameError;
use crate::progression::{grant_experience, LevelUp, VICTORY_EXPERIENCE};

use super::damage::{Mitigation, SPECIAL, SPELL};
use super::dice::Roller;

/// Where an encounter stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncounterState {
    #[default]
    Ongoing,
    PlayerVictory,
    PlayerDefeat,
}

impl EncounterState {
    /// Whether the encounter is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EncounterState::Ongoing)
    }
}

/// Player turn choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Attack,
    Cast,
    Special,
    Defend,
}

impl Action {
    /// All actions in menu order
    pub fn all() -> &'static [Action] {
        &[Action::Attack, Action::Cast, Action::Special, Action::Defend]
    }

    /// Menu code ("1".."4")
    pub fn code(&self) -> &'static str {
        match self {
            Action::Attack => "1",
            Action::Cast => "2",
            Action::Special => "3",
            Action::Defend => "4",
        }
    }
}

impl FromStr for Action {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "attack" => Ok(Action::Attack),
            "2" | "cast" | "spell" => Ok(Action::Cast),
            "3" | "special" => Ok(Action::Special),
            "4" | "defend" => Ok(Action::Defend),
            other => Err(GameError::InvalidAction(other.to_string())),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Action::Attack => "Attack",
            Action::Cast => "Cast Spell",
            Action::Special => "Special Attack",
            Action::Defend => "Defend",
        };
        write!(f, "{}", s)
    }
}

/// What the player's action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Damage landed on the enemy
    Hit(u32),
    /// Not enough magic; no damage, magic unchanged
    Fizzled { needed: u32, available: u32 },
    /// Player braced for the enemy's blow
    Guarded,
    /// Unrecognized action; the enemy got a free strike
    Forfeited,
    /// The encounter was already over
    Idle,
}

/// Result of one turn, for the shell to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// State after the turn
    pub state: EncounterState,
    /// Action taken, `None` when forfeited
    pub action: Option<Action>,
    /// What the action did
    pub outcome: ActionOutcome,
    /// Damage dealt to the enemy
    pub damage_dealt: u32,
    /// Damage taken by the player
    pub damage_taken: u32,
    /// Level gained on victory
    pub level_up: Option<LevelUp>,
    /// Narration lines
    pub messages: Vec<String>,
}

impl TurnReport {
    fn new(state: EncounterState, action: Option<Action>) -> Self {
        Self {
            state,
            action,
            outcome: ActionOutcome::Idle,
            damage_dealt: 0,
            damage_taken: 0,
            level_up: None,
            messages: Vec::new(),
        }
    }
}

/// Read-only snapshot for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub turn: u32,
    pub player_name: String,
    pub player_hp: u32,
    pub player_magic: u32,
    pub enemy_name: String,
    pub enemy_hp: u32,
    pub state: EncounterState,
}

/// A fight between one player and one enemy
#[derive(Debug)]
pub struct Encounter<'a> {
    player: &'a mut Player,
    enemy: Enemy,
    state: EncounterState,
    turns: u32,
}

impl<'a> Encounter<'a> {
    /// Start an encounter. A side that is already down decides it at once.
    pub fn new(player: &'a mut Player, enemy: Enemy) -> Self {
        let state = if !player.is_alive() {
            EncounterState::PlayerDefeat
        } else if !enemy.is_alive() {
            EncounterState::PlayerVictory
        } else {
            EncounterState::Ongoing
        };
        debug!("{} engages {}", player.name, enemy.name());
        Self {
            player,
            enemy,
            state,
            turns: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> EncounterState {
        self.state
    }

    /// Turns resolved so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The player
    pub fn player(&self) -> &Player {
        &*self.player
    }

    /// The enemy
    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    /// Snapshot for rendering
    pub fn view(&self) -> TurnView {
        TurnView {
            turn: self.turns + 1,
            player_name: self.player.name.clone(),
            player_hp: self.player.stats.hp,
            player_magic: self.player.stats.magic,
            enemy_name: self.enemy.name().to_string(),
            enemy_hp: self.enemy.stats().hp,
            state: self.state,
        }
    }

    /// Parse a menu code and take the turn; unknown codes forfeit
    pub fn submit(&mut self, code: &str, rng: &mut impl Roller) -> TurnReport {
        match code.parse::<Action>() {
            Ok(action) => self.take_turn(Some(action), rng),
            Err(err) => {
                warn!("{}; the enemy attacks", err);
                self.take_turn(None, rng)
            }
        }
    }

    /// Resolve one turn. `None` is a forfeited turn.
    pub fn take_turn(&mut self, action: Option<Action>, rng: &mut impl Roller) -> TurnReport {
        let mut report = TurnReport::new(self.state, action);
        if self.state.is_terminal() {
            report.messages.push("The fight is already over.".to_string());
            return report;
        }
        self.turns += 1;

        let mut mitigation = Mitigation::Normal;
        match action {
            None => {
                report.outcome = ActionOutcome::Forfeited;
                report.messages.push("Invalid choice. The enemy attacks!".to_string());
                self.retaliate(Mitigation::Normal, &mut report, rng);
                if !self.player.is_alive() {
                    return self.finish(EncounterState::PlayerDefeat, report);
                }
            }
            Some(Action::Attack) => {
                let result = self.player.attack_target(&mut self.enemy, rng);
                report.outcome = ActionOutcome::Hit(result.applied);
                report.damage_dealt = result.applied;
                report.messages.push(format!(
                    "{} attacks {} for {} damage!",
                    self.player.name,
                    self.enemy.name(),
                    result.final_damage
                ));
            }
            Some(Action::Cast) | Some(Action::Special) => {
                let technique = if action == Some(Action::Cast) {
                    &SPELL
                } else {
                    &SPECIAL
                };
                match self.player.use_technique(technique, &mut self.enemy, rng) {
                    Ok(result) => {
                        report.outcome = ActionOutcome::Hit(result.applied);
                        report.damage_dealt = result.applied;
                        report.messages.push(format!(
                            "{} uses a {} on {} for {} damage!",
                            self.player.name,
                            technique.name,
                            self.enemy.name(),
                            result.final_damage
                        ));
                    }
                    Err(GameError::InsufficientResource { needed, available }) => {
                        debug!("{} fizzles: {} of {} magic", technique.name, available, needed);
                        report.outcome = ActionOutcome::Fizzled { needed, available };
                        report.messages.push(format!(
                            "{} doesn't have enough magic for a {}!",
                            self.player.name, technique.name
                        ));
                    }
                    Err(err) => {
                        // Only reachable for a dead player, which cannot be Ongoing
                        warn!("{} failed: {}", technique.name, err);
                    }
                }
            }
            Some(Action::Defend) => {
                mitigation = Mitigation::Guarded;
                report.outcome = ActionOutcome::Guarded;
                report.messages.push(format!(
                    "{} defends and reduces incoming damage!",
                    self.player.name
                ));
            }
        }

        if !self.enemy.is_alive() {
            report
                .messages
                .push(format!("{} has been defeated!", self.enemy.name()));
            report.level_up = grant_experience(&mut *self.player, VICTORY_EXPERIENCE);
            if let Some(level_up) = report.level_up {
                report.messages.push(format!(
                    "{} has leveled up to level {}!",
                    self.player.name, level_up.level
                ));
            }
            return self.finish(EncounterState::PlayerVictory, report);
        }

        self.retaliate(mitigation, &mut report, rng);
        if !self.player.is_alive() {
            return self.finish(EncounterState::PlayerDefeat, report);
        }

        debug!(
            "turn {}: {} hp {}, {} hp {}",
            self.turns,
            self.player.name,
            self.player.stats.hp,
            self.enemy.name(),
            self.enemy.stats().hp
        );
        report
    }

    fn retaliate(&mut self, mitigation: Mitigation, report: &mut TurnReport, rng: &mut impl Roller) {
        let result = self.enemy.attack_target(&mut *self.player, mitigation, rng);
        report.damage_taken += result.applied;
        report.messages.push(format!(
            "{} attacks {} for {} damage!",
            self.enemy.name(),
            self.player.name,
            result.final_damage
        ));
    }

    fn finish(&mut self, state: EncounterState, mut report: TurnReport) -> TurnReport {
        self.state = state;
        report.state = state;
        match state {
            EncounterState::PlayerVictory => {
                info!("{} defeated {} in {} turns", self.player.name, self.enemy.name(), self.turns)
            }
            EncounterState::PlayerDefeat => {
                report.messages.push(format!("{} has fallen...", self.player.name));
                info!("{} was defeated by {}", self.player.name, self.enemy.name())
            }
            EncounterState::Ongoing => {}
        }
        report
    }
}
