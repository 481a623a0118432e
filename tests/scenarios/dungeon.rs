//! Dungeon run scenario tests

use isekai::actors::MAX_LEVEL;
use isekai::combat::{EncounterState, ScriptedRolls};
use isekai::dungeon::{
    Difficulty, DungeonRun, RunOutcome, COMPLETION_EXPERIENCE, COMPLETION_GOLD,
};

use crate::harness::{hero, AlwaysAttack, Scripted};

/// Each level: goblin spawns with hp 20 and attack 5, then falls to one blow
fn one_blow_levels() -> ScriptedRolls {
    ScriptedRolls::cycle(vec![20, 5, 100])
}

#[test]
fn test_capped_hero_clears_every_level() {
    let mut player = hero();
    player.stats.level = MAX_LEVEL;
    let gold = player.gold;
    let mut rolls = one_blow_levels();
    let mut run = DungeonRun::with_size(Difficulty::Hard, 5);

    let report = run.explore(&mut player, &mut AlwaysAttack, &mut rolls);

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.levels_cleared, 5);
    assert!(report
        .fights
        .iter()
        .all(|fight| fight.state == EncounterState::PlayerVictory && fight.turns == 1));
    assert_eq!(player.gold, gold + COMPLETION_GOLD);
    assert_eq!(player.stats.experience, 5 * 5 + COMPLETION_EXPERIENCE);
    assert_eq!(player.stats.hp, 100);
    assert_eq!(run.levels_cleared(), 5);
}

#[test]
fn test_completion_reward_skips_level_check() {
    let mut player = hero();
    let mut rolls = one_blow_levels();
    let mut run = DungeonRun::with_size(Difficulty::Easy, 3);

    let report = run.explore(&mut player, &mut AlwaysAttack, &mut rolls);

    assert_eq!(report.outcome, RunOutcome::Completed);
    // The second victory reached 10 and levelled up; the reward is banked
    assert_eq!(player.stats.level, 2);
    assert_eq!(player.stats.attack, 15);
    assert_eq!(player.stats.experience, 5 + COMPLETION_EXPERIENCE);
}

#[test]
fn test_walking_away_forfeits_the_reward() {
    let mut player = hero();
    let gold = player.gold;
    // Goblin spawns with hp 50 and attack 5, the blow rolls 1, the goblin rolls 2
    let mut rolls = ScriptedRolls::cycle(vec![50, 5, 1, 2]);
    let mut source = Scripted::new(["1"]);
    let mut run = DungeonRun::with_size(Difficulty::Medium, 3);

    let report = run.explore(&mut player, &mut source, &mut rolls);

    assert_eq!(report.outcome, RunOutcome::Abandoned);
    assert_eq!(report.levels_cleared, 0);
    assert_eq!(report.gold_reward, 0);
    assert_eq!(report.fights.len(), 1);
    assert!(report.fights[0].abandoned);
    assert_eq!(player.gold, gold);
    assert_eq!(player.stats.hp, 98);
}

#[test]
fn test_fallen_hero_stops_the_run() {
    let mut player = hero();
    player.stats.hp = 10;
    // First level is a pushover, the second goblin hits for 40
    let mut rolls = ScriptedRolls::cycle(vec![20, 5, 100, 50, 40, 1, 40]);
    let mut run = DungeonRun::with_size(Difficulty::Hard, 4);

    let report = run.explore(&mut player, &mut AlwaysAttack, &mut rolls);

    assert_eq!(report.outcome, RunOutcome::Failed);
    assert_eq!(report.levels_cleared, 1);
    assert_eq!(report.fights.len(), 2);
    assert_eq!(report.experience_reward, 0);
    assert_eq!(player.stats.hp, 0);
    assert_eq!(player.stats.experience, 5);
}
