use super::*;

/// Tests the membership lookup for an account listed in a stored roster.
///
/// Expected: Ok(Some(clan_id)) of the containing clan
#[tokio::test]
async fn finds_clan_of_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db, 7, vec![1, 2]).await?;
    factory::create_clan(db, 9, vec![42]).await?;

    let result = ClanRepository::new(db).find_clan_containing_member(42).await?;

    assert_eq!(result, Some(9));

    Ok(())
}

/// Tests the membership lookup for an account absent from every roster.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_clanless_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db, 7, vec![1, 2]).await?;

    let result = ClanRepository::new(db).find_clan_containing_member(42).await?;

    assert_eq!(result, None);

    Ok(())
}
