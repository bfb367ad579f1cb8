use super::*;

/// Tests restoring the clan flag of a clanless player.
///
/// Expected: Ok with only the listed player flagged and history untouched
#[tokio::test]
async fn sets_has_clan_for_listed_players() -> Result<(), crate::server::error::AppError> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for account_id in [42, 43] {
        factory::player::PlayerFactory::new(db)
            .account_id(account_id)
            .has_clan(false)
            .history_entry(7, "Foo", 1_000)
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let updated = repo.mark_in_clan(&[42]).await?;

    assert_eq!(updated, 1);
    let alice = repo.find_by_account_id(42).await?.unwrap();
    assert!(alice.has_clan);
    assert_eq!(alice.history().len(), 1);
    assert!(!repo.find_by_account_id(43).await?.unwrap().has_clan);

    Ok(())
}
