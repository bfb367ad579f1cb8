use std::time::Duration;

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{builder::TestBuilder, factory, fixture::wot};
use url::Url;
use wiremock::{
    matchers::{path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::server::{
    config::{ApiConfig, SyncConfig},
    data::{clan::ClanRepository, player::PlayerRepository},
    dispatch::{Dispatcher, InlineDispatcher, RateLimitedDispatcher},
    model::{player::Player, sync::PageRange},
    service::sync::SyncService,
    wot::WotApiClient,
};


fn sync_config(page_range: PageRange, chunk_size: usize) -> SyncConfig {
    SyncConfig {
        page_range,
        chunk_size,
        requests_per_second: 100,
        max_concurrent: 4,
        schedule: "0 0 */6 * * *".to_string(),
        on_startup: false,
    }
}

fn service<D: Dispatcher>(
    server: &MockServer,
    db: &DatabaseConnection,
    dispatcher: D,
    config: SyncConfig,
) -> SyncService<D> {
    let client = WotApiClient::new(&ApiConfig {
        base_url: Url::parse(&server.uri()).unwrap(),
        application_id: "demo".to_string(),
        timeout: Duration::from_secs(2),
        max_connect_retries: 0,
    })
    .unwrap();

    SyncService::new(db.clone(), client, dispatcher, &config)
}

fn inline(
    server: &MockServer,
    db: &DatabaseConnection,
    page_range: PageRange,
) -> SyncService<InlineDispatcher> {
    service(server, db, InlineDispatcher, sync_config(page_range, 50))
}

/// Serves `clans` as list page `page_no`.
async fn mock_page(server: &MockServer, page_no: u32, clans: &[Value], total: Option<u64>) {
    Mock::given(path("/clan/list/"))
        .and(query_param("page_no", page_no.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(wot::clan_list_page(clans, total)))
        .mount(server)
        .await;
}

/// Serves `clans` as the details of the comma separated `clan_ids`.
async fn mock_info(server: &MockServer, clan_ids: &str, clans: &[Value]) {
    Mock::given(path("/clan/info/"))
        .and(query_param("clan_id", clan_ids))
        .respond_with(ResponseTemplate::new(200).set_body_json(wot::clan_info(clans)))
        .mount(server)
        .await;
}

async fn player(db: &DatabaseConnection, account_id: u64) -> Player {
    PlayerRepository::new(db)
        .find_by_account_id(account_id)
        .await
        .unwrap()
        .unwrap()
}

async fn member_ids(db: &DatabaseConnection, clan_id: u64) -> Vec<u64> {
    ClanRepository::new(db)
        .find_by_id(clan_id)
        .await
        .unwrap()
        .unwrap()
        .member_ids
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}
