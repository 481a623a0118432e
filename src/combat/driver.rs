//! Drives an encounter to the end with actions from the shell

use super::dice::Roller;
use super::state::{Action, Encounter, EncounterState, TurnReport, TurnView};
use crate::actors::{Enemy, Player};

/// A decision from whoever controls the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take this action
    Act(Action),
    /// Input that matched no action; forfeits the turn
    Unrecognized(String),
    /// Leave between turns
    Abandon,
}

/// Supplies player decisions turn by turn
pub trait ActionSource {
    /// Choose what to do on the turn described by `view`
    fn next_command(&mut self, view: &TurnView) -> Command;

    /// Observe a resolved turn (rendering hook)
    fn on_turn(&mut self, _report: &TurnReport) {}
}

/// How a driven fight ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightSummary {
    /// Final state; `Ongoing` when abandoned
    pub state: EncounterState,
    /// Whether the controller walked away
    pub abandoned: bool,
    /// Turns resolved
    pub turns: u32,
    /// Total damage dealt to the enemy
    pub damage_dealt: u32,
    /// Total damage taken by the player
    pub damage_taken: u32,
}

/// Fight `enemy` until one side falls or the source abandons
pub fn fight(
    player: &mut Player,
    enemy: Enemy,
    source: &mut impl ActionSource,
    rng: &mut impl Roller,
) -> FightSummary {
    let mut encounter = Encounter::new(player, enemy);
    let mut summary = FightSummary {
        state: encounter.state(),
        abandoned: false,
        turns: 0,
        damage_dealt: 0,
        damage_taken: 0,
    };

    while !encounter.state().is_terminal() {
        let report = match source.next_command(&encounter.view()) {
            Command::Act(action) => encounter.take_turn(Some(action), rng),
            Command::Unrecognized(code) => encounter.submit(&code, rng),
            Command::Abandon => {
                summary.abandoned = true;
                break;
            }
        };
        summary.damage_dealt += report.damage_dealt;
        summary.damage_taken += report.damage_taken;
        source.on_turn(&report);
    }

    summary.state = encounter.state();
    summary.turns = encounter.turns();
    summary
}
