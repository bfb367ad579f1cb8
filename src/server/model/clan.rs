//! Clan domain models.
//!
//! Provides the two remote views of a clan (a list-page summary and a full record with its
//! roster) and the stored clan the read API serves.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::model::clan::ClanDto;

/// One row of a remote clan list page.
///
/// Only what the page phase needs; names and tags are taken from the full record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanSummary {
    /// Externally assigned clan id.
    pub clan_id: u64,
    /// Member count as reported by the list, not a roster length.
    pub members_count: u32,
}

/// A roster entry of a full clan record.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanMember {
    pub account_id: u64,
    pub account_name: String,
    /// When the player joined this clan, per the remote source.
    pub joined_at: DateTime<Utc>,
}

/// A full clan record as returned by the remote details endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClanDetails {
    pub clan_id: u64,
    pub name: String,
    pub tag: String,
    pub members_count: u32,
    pub members: Vec<ClanMember>,
}

impl ClanDetails {
    /// Distinct account ids of the roster, in order of first appearance.
    pub fn member_ids(&self) -> Vec<u64> {
        let mut seen = HashSet::new();
        self.members
            .iter()
            .map(|m| m.account_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Snapshot of this record as it will be stored by a pass running at `updated_at`.
    ///
    /// `members_count` is the number of distinct roster ids, not the reported count.
    pub fn to_clan(&self, updated_at: DateTime<Utc>) -> Clan {
        let member_ids = self.member_ids();
        Clan {
            clan_id: self.clan_id,
            name: self.name.clone(),
            tag: self.tag.clone(),
            members_count: member_ids.len() as u32,
            member_ids,
            updated_at,
        }
    }
}

/// A stored clan.
///
/// Replaced wholesale on every sync that observes it; never deleted by the sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Clan {
    pub clan_id: u64,
    pub name: String,
    pub tag: String,
    pub members_count: u32,
    pub member_ids: Vec<u64>,
    pub updated_at: DateTime<Utc>,
}

impl Clan {
    /// Converts an entity model and its member rows to a clan domain model at the
    /// repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The clan row
    /// - `members` - The clan's `clan_member` rows
    pub fn from_entity(
        entity: entity::clan::Model,
        members: Vec<entity::clan_member::Model>,
    ) -> Self {
        let mut member_ids: Vec<u64> = members.into_iter().map(|m| m.account_id as u64).collect();
        member_ids.sort_unstable();

        Self {
            clan_id: entity.clan_id as u64,
            name: entity.name,
            tag: entity.tag,
            members_count: entity.members_count as u32,
            member_ids,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the clan domain model to a DTO for API responses.
    pub fn into_dto(self) -> ClanDto {
        ClanDto {
            clan_id: self.clan_id,
            name: self.name,
            tag: self.tag,
            members_count: self.members_count,
            member_ids: self.member_ids,
            updated_at: self.updated_at.timestamp(),
        }
    }
}
