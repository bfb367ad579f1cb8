use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClanDto {
    pub clan_id: u64,
    pub name: String,
    pub tag: String,
    pub members_count: u32,
    pub member_ids: Vec<u64>,
    /// Unix seconds of the sync pass that last stored this clan.
    pub updated_at: i64,
}
