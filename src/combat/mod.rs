//! Combat system module
//!
//! Implements the turn-based fight rules:
//! - Injectable roll sources (seeded or scripted)
//! - Damage formulas for blows, spells and special attacks
//! - Defend mitigation
//! - The encounter state machine and a driver for shell-controlled fights

mod damage;
mod dice;
mod driver;
mod state;

pub use damage::{
    melee_range, roll_melee, DamageResult, Mitigation, Technique, MELEE_SPREAD, SPECIAL, SPELL,
};
pub use dice::{seeded, RollRange, Roller, ScriptedRolls};
pub use driver::{fight, ActionSource, Command, FightSummary};
pub use state::{Action, ActionOutcome, Encounter, EncounterState, TurnReport, TurnView};
