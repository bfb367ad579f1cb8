use super::*;

/// Tests counting stored clans.
///
/// Expected: Ok(0) on an empty table, then the number of stored clans
#[tokio::test]
async fn counts_stored_clans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_clan(db, 1, vec![]).await?;
    factory::create_clan(db, 2, vec![10]).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
