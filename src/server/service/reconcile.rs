//! Clan membership reconciliation.
//!
//! Maps a freshly observed clan roster onto stored player state. Everything here is pure:
//! the caller loads the existing players, passes the observation time, and persists the
//! result.
//!
//! For a member of clan `C` observed at `now`:
//!
//! - unknown player: new player, `has_clan = true`, history `[C joined_at..now]`
//! - stored player whose last entry is `C` and who still had a clan: the last entry's
//!   `last_seen` moves to `now`
//! - otherwise (different clan, or previously clanless): a new entry for `C` is appended
//!
//! In every case `has_clan` ends up `true` and the account name follows the remote record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::server::model::{
    clan::{ClanDetails, ClanMember},
    player::{HistoryEntry, Player},
};

/// Reconciles one observed clan member with their stored state.
///
/// # Arguments
/// - `clan` - The clan the member was observed in
/// - `member` - The roster entry
/// - `existing` - The stored player, if any
/// - `now` - Observation time written to `last_seen`
///
/// # Returns
/// The player record to store
pub fn reconcile_player(
    clan: &ClanDetails,
    member: &ClanMember,
    existing: Option<Player>,
    now: DateTime<Utc>,
) -> Player {
    let entry = HistoryEntry {
        clan_id: clan.clan_id,
        clan_name: clan.name.clone(),
        created_at: member.joined_at,
        last_seen: now,
    };

    let Some(mut player) = existing else {
        tracing::debug!(
            "New player {} observed in clan {}",
            member.account_id,
            clan.clan_id
        );
        return Player::new(member.account_id, member.account_name.clone(), entry);
    };

    if !player.has_clan || player.last_entry().clan_id != clan.clan_id {
        tracing::debug!(
            "Player {} moved from clan {} to clan {}",
            player.account_id,
            player.last_entry().clan_id,
            clan.clan_id
        );
        player.append_entry(entry);
    } else {
        player.touch_last_seen(now);
    }

    player.has_clan = true;
    player.account_name = member.account_name.clone();
    player
}

/// Reconciles a whole clan roster.
///
/// Stored players are taken out of `existing` as they are consumed. A clan without
/// members yields no players.
///
/// # Arguments
/// - `clan` - The observed clan with its roster
/// - `existing` - Stored players keyed by account id; may contain accounts outside the roster
/// - `now` - Observation time shared by every member of this clan
///
/// # Returns
/// One player record per distinct roster member
pub fn reconcile_clan(
    clan: &ClanDetails,
    existing: &mut HashMap<u64, Player>,
    now: DateTime<Utc>,
) -> Vec<Player> {
    let mut players: Vec<Player> = Vec::with_capacity(clan.members.len());
    let mut index_by_account: HashMap<u64, usize> = HashMap::new();

    for member in &clan.members {
        // A roster listing the same account twice still yields one record.
        if let Some(&index) = index_by_account.get(&member.account_id) {
            let previous = players[index].clone();
            players[index] = reconcile_player(clan, member, Some(previous), now);
            continue;
        }

        let stored = existing.remove(&member.account_id);
        index_by_account.insert(member.account_id, players.len());
        players.push(reconcile_player(clan, member, stored, now));
    }

    players
}
