use crate::server::{data::clan::ClanRepository, model::clan::Clan};
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count;
mod find_by_id;
mod find_clan_containing_member;
mod upsert;

fn clan(clan_id: u64, name: &str, member_ids: Vec<u64>, updated_at: i64) -> Clan {
    Clan {
        clan_id,
        name: name.to_string(),
        tag: name.to_uppercase(),
        members_count: member_ids.len() as u32,
        member_ids,
        updated_at: DateTime::<Utc>::from_timestamp(updated_at, 0).unwrap(),
    }
}
