use super::*;

/// Tests loading part of a roster where only some accounts are stored.
///
/// Expected: Ok with only the stored accounts present in the map
#[tokio::test]
async fn returns_only_stored_players() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, 42, 7).await?;
    factory::create_player(db, 43, 7).await?;
    factory::create_player(db, 99, 8).await?;

    let found = PlayerRepository::new(db)
        .find_by_account_ids(&[42, 43, 44])
        .await?;

    assert_eq!(found.len(), 2);
    assert!(found.contains_key(&42));
    assert!(found.contains_key(&43));
    assert!(!found.contains_key(&99));
    assert_eq!(found[&42u64].last_entry().clan_id, 7);

    Ok(())
}

/// Tests that a stored player without history is treated as absent.
///
/// Expected: Ok with the broken player omitted and the rest returned
#[tokio::test]
async fn skips_players_without_history() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .account_id(42)
        .build()
        .await?;
    factory::create_player(db, 43, 7).await?;

    let found = PlayerRepository::new(db)
        .find_by_account_ids(&[42, 43])
        .await?;

    assert_eq!(found.len(), 1);
    assert!(found.contains_key(&43));

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn accepts_empty_id_list() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlayerRepository::new(db).find_by_account_ids(&[]).await?;

    assert!(found.is_empty());

    Ok(())
}
