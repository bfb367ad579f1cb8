use super::*;

/// Tests writing players that were never stored.
///
/// Expected: Ok with each player and its single history entry stored
#[tokio::test]
async fn inserts_new_players() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let written = repo
        .bulk_upsert(&[
            Player::new(42, "Alice".to_string(), entry(7, "Foo", 1_000, 5_000)),
            Player::new(43, "Bob".to_string(), entry(7, "Foo", 1_100, 5_000)),
        ])
        .await?;

    assert_eq!(written, 2);
    let alice = repo.find_by_account_id(42).await?.unwrap();
    assert_eq!(alice.account_name, "Alice");
    assert!(alice.has_clan);
    assert_eq!(alice.history(), &[entry(7, "Foo", 1_000, 5_000)]);

    Ok(())
}

/// Tests that an appended entry is stored after the existing ones.
///
/// Expected: Ok with the stored first entry untouched and the new entry last
#[tokio::test]
async fn appends_new_history_entry() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let mut player = Player::new(42, "Alice".to_string(), entry(7, "Foo", 1_000, 5_000));
    repo.bulk_upsert(std::slice::from_ref(&player)).await?;

    player.append_entry(entry(9, "Bar", 6_000, 7_000));
    repo.bulk_upsert(&[player]).await?;

    let stored = repo.find_by_account_id(42).await?.unwrap();
    assert_eq!(
        stored.history(),
        &[entry(7, "Foo", 1_000, 5_000), entry(9, "Bar", 6_000, 7_000)]
    );

    Ok(())
}

/// Tests that rewriting an existing entry only moves its `last_seen`.
///
/// Stored entries are immutable apart from `last_seen`, even if the caller passes a
/// different clan name for the same position.
///
/// Expected: Ok with the original clan name and join time, new `last_seen`
#[tokio::test]
async fn only_updates_last_seen_of_existing_entries() -> Result<(), crate::server::error::AppError>
{
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.bulk_upsert(&[Player::new(
        42,
        "Alice".to_string(),
        entry(7, "Foo", 1_000, 5_000),
    )])
    .await?;

    repo.bulk_upsert(&[Player::new(
        42,
        "Alice".to_string(),
        entry(7, "Foo Renamed", 1_000, 9_000),
    )])
    .await?;

    let stored = repo.find_by_account_id(42).await?.unwrap();
    assert_eq!(stored.history(), &[entry(7, "Foo", 1_000, 9_000)]);

    Ok(())
}

/// Tests that player attributes are overwritten on conflict.
///
/// Expected: Ok with the new name and clan flag stored
#[tokio::test]
async fn updates_player_attributes() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .account_name("Alice")
        .has_clan(false)
        .history_entry(7, "Foo", 1_000)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let mut player = repo.find_by_account_id(42).await?.unwrap();
    player.account_name = "AliceTheGreat".to_string();
    player.has_clan = true;
    repo.bulk_upsert(&[player]).await?;

    let stored = repo.find_by_account_id(42).await?.unwrap();
    assert_eq!(stored.account_name, "AliceTheGreat");
    assert!(stored.has_clan);

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let written = PlayerRepository::new(db).bulk_upsert(&[]).await?;

    assert_eq!(written, 0);

    Ok(())
}
