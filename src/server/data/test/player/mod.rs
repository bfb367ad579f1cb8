use crate::server::{
    data::player::PlayerRepository,
    model::player::{HistoryEntry, Player},
};
use chrono::{DateTime, Utc};
use test_utils::{builder::TestBuilder, factory};

mod bulk_upsert;
mod find_by_account_id;
mod find_by_account_ids;
mod find_by_name;
mod iterate_all;
mod mark_clanless;
mod mark_in_clan;

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}

fn entry(clan_id: u64, clan_name: &str, created_at: i64, last_seen: i64) -> HistoryEntry {
    HistoryEntry {
        clan_id,
        clan_name: clan_name.to_string(),
        created_at: at(created_at),
        last_seen: at(last_seen),
    }
}
