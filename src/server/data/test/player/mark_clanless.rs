use super::*;

/// Tests flagging a subset of players as clanless.
///
/// Expected: Ok with only the listed players updated and history untouched
#[tokio::test]
async fn clears_has_clan_for_listed_players() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, 42, 7).await?;
    factory::create_player(db, 43, 7).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo.mark_clanless(&[42]).await?;

    assert_eq!(updated, 1);
    let alice = repo.find_by_account_id(42).await?.unwrap();
    assert!(!alice.has_clan);
    assert_eq!(alice.history().len(), 1);
    assert!(repo.find_by_account_id(43).await?.unwrap().has_clan);

    Ok(())
}

/// Tests an empty id list.
///
/// Expected: Ok(0)
#[tokio::test]
async fn accepts_empty_id_list() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(PlayerRepository::new(db).mark_clanless(&[]).await?, 0);

    Ok(())
}
