//! Whole-session scenario tests

use isekai::actors::{CharacterClass, EffectOutcome, ItemUse, HEALING_POTION};
use isekai::combat::{EncounterState, ScriptedRolls};
use isekai::town::POTION_PRICE;
use isekai::{GameError, Origin, Session};

use crate::harness::{AlwaysAttack, TestSaves};

#[tokio::test]
async fn test_play_save_and_resume() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let (mut session, origin) = Session::start(saves.store.clone(), "Kazuma", CharacterClass::Warrior, true)
        .await
        .expect("start failed");
    assert_eq!(origin, Origin::Fresh);

    // Town: one potion and the guild
    let potion = session.visit_shop().expect("shop failed");
    assert_eq!(potion.name, HEALING_POTION);
    assert!(session.join_guild());
    assert!(!session.join_guild());
    assert_eq!(session.player().gold, 50 - POTION_PRICE);

    // Wild goblin: hp 50, blows of 25, it hits back for 5 once
    let mut rolls = ScriptedRolls::cycle(vec![25, 5]);
    let summary = session.explore(&mut AlwaysAttack, &mut rolls);
    assert_eq!(summary.state, EncounterState::PlayerVictory);
    assert_eq!(session.player().stats.hp, 95);

    let used = session.use_item(0).expect("potion failed");
    assert!(matches!(
        used,
        ItemUse::Consumed {
            outcome: EffectOutcome::Healed(5),
            ..
        }
    ));
    assert!(session.player().inventory.is_empty());

    session.save().await.expect("save failed");
    let before = session.into_player();

    let store = saves.reopen().await.expect("Failed to reopen");
    let (resumed, origin) = Session::start(store, "Kazuma", CharacterClass::Mage, true)
        .await
        .expect("resume failed");
    assert_eq!(origin, Origin::Loaded);
    assert_eq!(resumed.player(), &before);
}

#[tokio::test]
async fn test_shop_refuses_the_broke() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let (mut session, _) = Session::start(saves.store.clone(), "Aqua", CharacterClass::Healer, false)
        .await
        .expect("start failed");

    for _ in 0..5 {
        session.visit_shop().expect("shop failed");
    }
    let err = session.visit_shop().unwrap_err();
    assert!(matches!(
        err,
        GameError::InsufficientGold {
            price: 10,
            available: 0
        }
    ));
    assert_eq!(session.player().inventory.len(), 5);
}

#[tokio::test]
async fn test_new_game_ignores_existing_save() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let (mut session, _) = Session::start(saves.store.clone(), "Aqua", CharacterClass::Healer, false)
        .await
        .unwrap();
    session.player_mut().gold = 999;
    session.save().await.unwrap();

    let (fresh, origin) = Session::start(saves.store.clone(), "Aqua", CharacterClass::Healer, false)
        .await
        .unwrap();
    assert_eq!(origin, Origin::Fresh);
    assert_eq!(fresh.player().gold, 50);
}
