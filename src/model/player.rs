use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerDto {
    pub account_id: u64,
    pub account_name: String,
    pub has_clan: bool,
    /// Clan memberships, oldest first.
    pub history: Vec<HistoryEntryDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntryDto {
    pub clan_id: u64,
    pub clan_name: String,
    /// When the player joined the clan, as reported by the remote API.
    pub created_at: i64,
    pub last_seen: i64,
}
