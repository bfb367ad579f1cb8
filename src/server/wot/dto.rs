//! Wire format of the remote clan API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::server::model::clan::{ClanDetails, ClanMember, ClanSummary};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub meta: Option<Meta>,
    /// Absent on error envelopes; a missing `Option` field decodes as `None`.
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page_total: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClanSummaryDto {
    pub clan_id: u64,
    #[serde(default)]
    pub members_count: u32,
}

impl From<ClanSummaryDto> for ClanSummary {
    fn from(dto: ClanSummaryDto) -> Self {
        Self {
            clan_id: dto.clan_id,
            members_count: dto.members_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ClanInfoDto {
    pub clan_id: u64,
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub members_count: u32,
    #[serde(default)]
    pub members: Option<MembersDto>,
}

/// Rosters arrive either keyed by account id or as a plain array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MembersDto {
    Keyed(HashMap<String, MemberDto>),
    List(Vec<MemberDto>),
}

#[derive(Debug, Deserialize)]
pub struct MemberDto {
    pub account_id: u64,
    pub account_name: String,
    /// Unix seconds the member joined the clan.
    #[serde(alias = "joined_at")]
    pub created_at: i64,
}

impl From<ClanInfoDto> for ClanDetails {
    fn from(dto: ClanInfoDto) -> Self {
        let mut members: Vec<MemberDto> = match dto.members {
            Some(MembersDto::Keyed(map)) => map.into_values().collect(),
            Some(MembersDto::List(list)) => list,
            None => Vec::new(),
        };
        members.sort_by_key(|m| m.account_id);

        Self {
            clan_id: dto.clan_id,
            name: dto.name,
            tag: dto.tag,
            members_count: dto.members_count,
            members: members
                .into_iter()
                .map(|m| ClanMember {
                    account_id: m.account_id,
                    account_name: m.account_name,
                    joined_at: from_unix_seconds(m.created_at),
                })
                .collect(),
        }
    }
}

/// Converts Unix seconds from the API, falling back to the epoch when out of range.
pub fn from_unix_seconds(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(|| {
        tracing::warn!("Timestamp {} from clan API is out of range", secs);
        DateTime::UNIX_EPOCH
    })
}
