use super::*;

/// Tests storing a clan that was never seen before.
///
/// Expected: Ok with the clan row and every member row stored
#[tokio::test]
async fn inserts_new_clan_with_roster() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    repo.upsert(&clan(7, "Foo", vec![42, 43], 1_000)).await?;

    let stored = repo.find_by_id(7).await?.unwrap();
    assert_eq!(stored.name, "Foo");
    assert_eq!(stored.tag, "FOO");
    assert_eq!(stored.members_count, 2);
    assert_eq!(stored.member_ids, vec![42, 43]);
    assert_eq!(stored.updated_at.timestamp(), 1_000);

    Ok(())
}

/// Tests that a second upsert fully replaces the first instead of merging.
///
/// Expected: Ok with name, count and roster taken only from the second write
#[tokio::test]
async fn replaces_existing_clan_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    repo.upsert(&clan(7, "Foo", vec![42, 43], 1_000)).await?;
    repo.upsert(&clan(7, "Foo Renamed", vec![44], 2_000)).await?;

    let stored = repo.find_by_id(7).await?.unwrap();
    assert_eq!(stored.name, "Foo Renamed");
    assert_eq!(stored.members_count, 1);
    assert_eq!(stored.member_ids, vec![44]);
    assert_eq!(stored.updated_at.timestamp(), 2_000);
    assert_eq!(repo.find_clan_containing_member(42).await?, None);

    Ok(())
}

/// Tests storing a clan whose roster came back empty.
///
/// Expected: Ok with the clan stored and no member rows
#[tokio::test]
async fn stores_clan_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_clan(db, 7, vec![42]).await?;

    let repo = ClanRepository::new(db);
    repo.upsert(&clan(7, "Foo", Vec::new(), 1_000)).await?;

    let stored = repo.find_by_id(7).await?.unwrap();
    assert!(stored.member_ids.is_empty());
    assert_eq!(stored.members_count, 0);

    Ok(())
}

/// Tests that a roster listing the same account twice is stored once.
///
/// Expected: Ok with a single member row for the duplicated account
#[tokio::test]
async fn ignores_duplicate_member_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_clan_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    repo.upsert(&clan(7, "Foo", vec![42, 42], 1_000)).await?;

    let stored = repo.find_by_id(7).await?.unwrap();
    assert_eq!(stored.member_ids, vec![42]);

    Ok(())
}
