use super::*;

/// Tests an exact, case-sensitive name match.
///
/// Expected: Ok(Some(Player)) for the exactly matching account even when another
/// account differs only in case
#[tokio::test]
async fn prefers_exact_match() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(1)
        .account_name("alice")
        .history_entry(7, "Foo", 1_000)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .account_id(2)
        .account_name("Alice")
        .history_entry(9, "Bar", 1_000)
        .build()
        .await?;

    let player = PlayerRepository::new(db)
        .find_by_name("Alice")
        .await?
        .unwrap();

    assert_eq!(player.account_id, 2);

    Ok(())
}

/// Tests the case-insensitive fallback.
///
/// Expected: Ok(Some(Player)) when only the casing differs
#[tokio::test]
async fn falls_back_to_case_insensitive_match() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .account_name("Alice")
        .history_entry(7, "Foo", 1_000)
        .build()
        .await?;

    let player = PlayerRepository::new(db)
        .find_by_name("aLICE")
        .await?
        .unwrap();

    assert_eq!(player.account_id, 42);
    assert_eq!(player.history().len(), 1);

    Ok(())
}

/// Tests that wildcard characters in the name are matched literally.
///
/// Expected: Ok(None) for a pattern-like name that matches no account exactly
#[tokio::test]
async fn treats_name_literally() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .account_name("Alice")
        .history_entry(7, "Foo", 1_000)
        .build()
        .await?;

    let result = PlayerRepository::new(db).find_by_name("A%").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the case-insensitive fallback on a name with non-ASCII letters.
///
/// Expected: Ok(Some(Player)) when `Ä` and `ä` differ, for a player written by the sync
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = PlayerRepository::new(db);

    repo.bulk_upsert(&[Player::new(
        42,
        "Ärger".to_string(),
        entry(7, "Foo", 1_000, 2_000),
    )])
    .await?;

    let player = repo.find_by_name("äRGER").await?.unwrap();

    assert_eq!(player.account_id, 42);
    assert_eq!(player.account_name, "Ärger");

    Ok(())
}
