use super::*;

/// Tests loading a stored player with a multi-entry history.
///
/// Expected: Ok(Some(Player)) with entries in append order
#[tokio::test]
async fn finds_existing_player() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .account_name("Alice")
        .history_entry(7, "Foo", 1_000)
        .history_entry(9, "Bar", 2_000)
        .build()
        .await?;

    let player = PlayerRepository::new(db)
        .find_by_account_id(42)
        .await?
        .unwrap();

    let clans: Vec<u64> = player.history().iter().map(|e| e.clan_id).collect();
    assert_eq!(clans, vec![7, 9]);
    assert_eq!(player.last_entry().created_at, at(2_000));

    Ok(())
}

/// Tests querying an account that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db).find_by_account_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests loading a player row that has no history rows.
///
/// Expected: Err(InternalErr(EmptyHistory))
#[tokio::test]
async fn fails_for_player_without_history() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .build()
        .await?;

    let result = PlayerRepository::new(db).find_by_account_id(42).await;

    assert!(matches!(
        result,
        Err(crate::server::error::AppError::InternalErr(
            crate::server::error::internal::InternalError::EmptyHistory { account_id: 42 }
        ))
    ));

    Ok(())
}
