use super::*;

/// Tests walking every stored player across several pages.
///
/// Expected: every player returned exactly once, in ascending account id order
#[tokio::test]
async fn walks_all_players_in_pages() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for account_id in [5, 1, 4, 2, 3] {
        factory::create_player(db, account_id, 7).await?;
    }

    let repo = PlayerRepository::new(db);
    let mut pages = repo.iterate_all(2);
    let mut page_sizes = Vec::new();
    let mut seen = Vec::new();
    while let Some(page) = pages.next_page().await? {
        page_sizes.push(page.len());
        seen.extend(page.into_iter().map(|p| p.account_id));
    }

    assert_eq!(page_sizes, vec![2, 2, 1]);
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Tests that each call starts an independent walk.
///
/// Expected: a second cursor starts again from the first player
#[tokio::test]
async fn cursors_are_restartable() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db, 1, 7).await?;
    factory::create_player(db, 2, 7).await?;

    let repo = PlayerRepository::new(db);
    let mut first = repo.iterate_all(1);
    first.next_page().await?;

    let mut second = repo.iterate_all(1);
    let page = second.next_page().await?.unwrap();

    assert_eq!(page[0].account_id, 1);

    Ok(())
}

/// Tests walking an empty table.
///
/// Expected: Ok(None) on the first page
#[tokio::test]
async fn yields_nothing_without_players() -> Result<(), sea_orm::DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let mut pages = repo.iterate_all(10);

    assert!(pages.next_page().await?.is_none());

    Ok(())
}
