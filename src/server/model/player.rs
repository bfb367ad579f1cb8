//! Player domain models.
//!
//! A player carries an append-only clan membership history. The history is only reachable
//! through methods that keep it non-empty and never reorder or drop entries, so the last
//! entry always reflects the most recently observed membership.

use chrono::{DateTime, Utc};

use crate::{
    model::player::{HistoryEntryDto, PlayerDto},
    server::error::internal::InternalError,
};

/// One clan membership in a player's history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub clan_id: u64,
    /// Clan name when the entry was appended; not updated on later renames.
    pub clan_name: String,
    /// When the player joined the clan, per the remote source.
    pub created_at: DateTime<Utc>,
    /// Last sync that observed the player in this clan.
    pub last_seen: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn into_dto(self) -> HistoryEntryDto {
        HistoryEntryDto {
            clan_id: self.clan_id,
            clan_name: self.clan_name,
            created_at: self.created_at.timestamp(),
            last_seen: self.last_seen.timestamp(),
        }
    }

    fn from_entity(entity: entity::player_history::Model) -> Self {
        Self {
            clan_id: entity.clan_id as u64,
            clan_name: entity.clan_name,
            created_at: entity.created_at,
            last_seen: entity.last_seen,
        }
    }
}

/// A tracked player account.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub account_id: u64,
    pub account_name: String,
    pub has_clan: bool,
    history: Vec<HistoryEntry>,
}

impl Player {
    /// Creates a player first observed as a member of the clan in `first`.
    pub fn new(account_id: u64, account_name: String, first: HistoryEntry) -> Self {
        Self {
            account_id,
            account_name,
            has_clan: true,
            history: vec![first],
        }
    }

    /// Rebuilds a player from stored parts.
    ///
    /// # Returns
    /// - `Ok(Player)` - `history` is non-empty
    /// - `Err(InternalError::EmptyHistory)` - No history entries were supplied
    pub fn from_parts(
        account_id: u64,
        account_name: String,
        has_clan: bool,
        history: Vec<HistoryEntry>,
    ) -> Result<Self, InternalError> {
        if history.is_empty() {
            return Err(InternalError::EmptyHistory { account_id });
        }

        Ok(Self {
            account_id,
            account_name,
            has_clan,
            history,
        })
    }

    /// Converts a player row and its history rows at the repository boundary.
    ///
    /// History rows may arrive in any order; they are sorted by their stored position.
    pub fn from_entity(
        entity: entity::player::Model,
        mut history: Vec<entity::player_history::Model>,
    ) -> Result<Self, InternalError> {
        history.sort_by_key(|h| h.position);

        Self::from_parts(
            entity.account_id as u64,
            entity.account_name,
            entity.has_clan,
            history.into_iter().map(HistoryEntry::from_entity).collect(),
        )
    }

    /// Clan memberships, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The most recently observed membership.
    pub fn last_entry(&self) -> &HistoryEntry {
        // Every constructor guarantees at least one entry.
        &self.history[self.history.len() - 1]
    }

    /// Appends a new membership after all existing entries.
    pub fn append_entry(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Records that the current membership was observed again at `now`.
    pub fn touch_last_seen(&mut self, now: DateTime<Utc>) {
        let last = self.history.len() - 1;
        self.history[last].last_seen = now;
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            account_id: self.account_id,
            account_name: self.account_name,
            has_clan: self.has_clan,
            history: self.history.into_iter().map(HistoryEntry::into_dto).collect(),
        }
    }
}
