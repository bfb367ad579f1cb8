use super::*;

/// Tests loading a stored clan with its roster.
///
/// Expected: Ok(Some(Clan)) with member ids in ascending order
#[tokio::test]
async fn finds_existing_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::clan::ClanFactory::new(db)
        .clan_id(9)
        .name("Bar")
        .member_ids(vec![50, 10, 30])
        .build()
        .await?;

    let result = ClanRepository::new(db).find_by_id(9).await?;

    let clan = result.unwrap();
    assert_eq!(clan.clan_id, 9);
    assert_eq!(clan.name, "Bar");
    assert_eq!(clan.member_ids, vec![10, 30, 50]);

    Ok(())
}

/// Tests querying a clan id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db, 9, vec![42]).await?;

    let result = ClanRepository::new(db).find_by_id(10).await?;

    assert!(result.is_none());

    Ok(())
}
