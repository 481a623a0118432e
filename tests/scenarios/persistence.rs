//! Save and load against a real SQLite file

use isekai::actors::CharacterClass;
use isekai::persistence::{load_or_create, load_player, save_player, SaveStore};
use isekai::GameError;

use crate::harness::{hero, veteran, TestSaves};

#[tokio::test]
async fn test_save_survives_reopen() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let player = veteran();
    save_player(&saves.store, &player).await.expect("save failed");

    let store = saves.reopen().await.expect("Failed to reopen");
    let loaded = load_player(&store, "Megumin").await.expect("load failed");
    assert_eq!(loaded, player);
}

#[tokio::test]
async fn test_missing_save_is_not_found() {
    let saves = TestSaves::open().await.expect("Failed to open saves");

    let err = load_player(&saves.store, "Darkness").await.unwrap_err();
    assert!(matches!(err, GameError::RecordNotFound(name) if name == "Darkness"));

    let (player, from_save) = load_or_create(&saves.store, "Darkness", CharacterClass::Healer)
        .await
        .expect("fallback failed");
    assert!(!from_save);
    assert_eq!(player.stats.hp, 100);
    assert_eq!(player.stats.magic, 10);
}

#[tokio::test]
async fn test_latest_save_wins() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let mut player = hero();
    save_player(&saves.store, &player).await.unwrap();

    player.gold = 3;
    player.stats.level = 2;
    player.stats.attack = 15;
    save_player(&saves.store, &player).await.unwrap();

    let loaded = load_player(&saves.store, "Kazuma").await.unwrap();
    assert_eq!(loaded, player);
}

#[tokio::test]
async fn test_list_and_delete() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    save_player(&saves.store, &veteran()).await.unwrap();
    save_player(&saves.store, &hero()).await.unwrap();

    assert_eq!(
        saves.store.list().await.unwrap(),
        vec!["Kazuma".to_string(), "Megumin".to_string()]
    );

    assert!(saves.store.delete("Kazuma").await.unwrap());
    assert!(matches!(
        load_player(&saves.store, "Kazuma").await,
        Err(GameError::RecordNotFound(_))
    ));
    assert_eq!(saves.store.list().await.unwrap(), vec!["Megumin".to_string()]);
}

#[tokio::test]
async fn test_bad_names_never_reach_storage() {
    let saves = TestSaves::open().await.expect("Failed to open saves");
    let mut player = hero();
    player.name = "'; DROP TABLE saves; --".to_string();

    let err = save_player(&saves.store, &player).await.unwrap_err();
    assert!(matches!(err, GameError::InvalidName(_)));
    assert!(saves.store.list().await.unwrap().is_empty());
}
