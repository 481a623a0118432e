//! Combat scenario tests

use isekai::actors::{Combatant, Enemy};
use isekai::combat::{fight, ActionOutcome, EncounterState, ScriptedRolls};

use crate::harness::{hero, Scripted};

/// Player attacks twice against a 20 hp goblin; rolls alternate 12 and 4
#[test]
fn test_two_blow_victory() {
    let mut player = hero();
    let mut source = Scripted::new(["1", "1", "1"]);
    let mut rolls = ScriptedRolls::cycle(vec![12, 4]);

    let summary = fight(&mut player, Enemy::new("Goblin", 20, 5), &mut source, &mut rolls);

    assert_eq!(summary.state, EncounterState::PlayerVictory);
    assert_eq!(summary.turns, 2);
    assert_eq!(summary.damage_dealt, 20);
    // Only the first blow drew a retaliation
    assert_eq!(summary.damage_taken, 4);
    assert_eq!(player.stats.hp, 96);
    assert_eq!(player.stats.experience, 5);
    assert_eq!(source.remaining(), 1);
    assert_eq!(rolls.drawn(), 3);
    assert!(source
        .transcript()
        .contains(&"Goblin has been defeated!".to_string()));
}

#[test]
fn test_spell_fizzles_when_drained() {
    let mut player = hero();
    let mut source = Scripted::new(["2", "2"]);
    let mut rolls = ScriptedRolls::cycle(vec![4]);

    let summary = fight(&mut player, Enemy::new("Ogre", 100, 5), &mut source, &mut rolls);

    assert!(summary.abandoned);
    assert_eq!(source.reports[0].outcome, ActionOutcome::Hit(4));
    assert_eq!(
        source.reports[1].outcome,
        ActionOutcome::Fizzled {
            needed: 3,
            available: 2
        }
    );
    assert_eq!(source.reports[1].damage_dealt, 0);
    // The enemy still strikes on a fizzled turn
    assert_eq!(source.reports[1].damage_taken, 4);
    assert_eq!(player.stats.magic, 2);
    assert_eq!(player.stats.hp, 92);
}

#[test]
fn test_defend_halves_the_blow() {
    let mut player = hero();
    let mut source = Scripted::new(["4", "defend"]);
    let mut rolls = ScriptedRolls::cycle(vec![9]);

    fight(&mut player, Enemy::new("Ogre", 100, 9), &mut source, &mut rolls);

    assert_eq!(source.reports.len(), 2);
    for report in &source.reports {
        assert_eq!(report.outcome, ActionOutcome::Guarded);
        assert_eq!(report.damage_taken, 4);
    }
    assert_eq!(player.stats.hp, 92);
}

#[test]
fn test_bad_input_gives_a_double_strike() {
    let mut player = hero();
    let mut source = Scripted::new(["fireball"]);
    let mut rolls = ScriptedRolls::cycle(vec![6]);

    let summary = fight(&mut player, Enemy::new("Ogre", 100, 6), &mut source, &mut rolls);

    assert_eq!(source.reports[0].outcome, ActionOutcome::Forfeited);
    assert_eq!(source.reports[0].action, None);
    assert_eq!(summary.damage_taken, 12);
    assert_eq!(player.stats.hp, 88);
}

#[test]
fn test_defeat_leaves_player_at_zero() {
    let mut player = hero();
    player.stats.hp = 5;
    let mut source = Scripted::new(["1"]);
    let mut rolls = ScriptedRolls::cycle(vec![1, 30]);

    let summary = fight(&mut player, Enemy::new("Troll", 100, 30), &mut source, &mut rolls);

    assert_eq!(summary.state, EncounterState::PlayerDefeat);
    assert_eq!(player.stats.hp, 0);
    assert!(!player.is_alive());
    assert_eq!(player.stats.experience, 0);
    assert_eq!(source.reports[0].state, EncounterState::PlayerDefeat);
}

#[test]
fn test_views_track_the_fight() {
    let mut player = hero();
    let mut source = Scripted::new(["1", "1"]);
    let mut rolls = ScriptedRolls::cycle(vec![12, 4]);

    fight(&mut player, Enemy::new("Goblin", 20, 5), &mut source, &mut rolls);

    assert_eq!(source.views.len(), 2);
    assert_eq!(source.views[0].enemy_hp, 20);
    assert_eq!(source.views[1].enemy_hp, 8);
    assert_eq!(source.views[1].player_hp, 96);
    assert_eq!(source.views[1].state, EncounterState::Ongoing);
}
