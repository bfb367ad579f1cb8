//! Player repository for database operations.
//!
//! This module provides the `PlayerRepository` for storing players together with their
//! clan history. A player is one `player` row plus one `player_history` row per history
//! entry, keyed by `(account_id, position)`. Conversion to the `Player` domain model
//! happens here so callers never see a player without history.

use std::collections::HashMap;

use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{error::AppError, model::player::Player};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a player by account id.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found with its full history
    /// - `Ok(None)` - No player stored with that account id
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - The stored player has no history rows
    pub async fn find_by_account_id(&self, account_id: u64) -> Result<Option<Player>, AppError> {
        let entity = entity::prelude::Player::find_by_id(account_id as i64)
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => Ok(Some(self.with_history(entity).await?)),
            None => Ok(None),
        }
    }

    /// Finds every stored player among `account_ids`, keyed by account id.
    ///
    /// Loads a whole clan roster with one query per table. Stored players without any
    /// history rows are skipped with a warning so reconciliation treats them as new
    /// rather than aborting the batch.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Stored players; ids with no stored player are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_account_ids(
        &self,
        account_ids: &[u64],
    ) -> Result<HashMap<u64, Player>, DbErr> {
        if account_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids: Vec<i64> = account_ids.iter().map(|id| *id as i64).collect();
        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::AccountId.is_in(ids.clone()))
            .all(self.db)
            .await?;

        Ok(self.attach_history(players, ids).await?)
    }

    /// Finds a player by account name.
    ///
    /// Tries a case-sensitive exact match first and falls back to a case-insensitive
    /// match against the stored lowercase form, which is folded with full Unicode rules.
    ///
    /// # Returns
    /// - `Ok(Some(Player))` - Player found with its full history
    /// - `Ok(None)` - No player matches the name either way
    /// - `Err(AppError)` - Database error or stored player without history
    pub async fn find_by_name(&self, account_name: &str) -> Result<Option<Player>, AppError> {
        let exact = entity::prelude::Player::find()
            .filter(entity::player::Column::AccountName.eq(account_name))
            .order_by_asc(entity::player::Column::AccountId)
            .one(self.db)
            .await?;

        let entity = match exact {
            Some(entity) => Some(entity),
            None => {
                entity::prelude::Player::find()
                    .filter(
                        entity::player::Column::AccountNameLower.eq(account_name.to_lowercase()),
                    )
                    .order_by_asc(entity::player::Column::AccountId)
                    .one(self.db)
                    .await?
            }
        };

        match entity {
            Some(entity) => Ok(Some(self.with_history(entity).await?)),
            None => Ok(None),
        }
    }

    /// Upserts players together with their history.
    ///
    /// Each player is written in its own transaction: the player row, then every history
    /// entry keyed by its position. An existing history row only has `last_seen`
    /// updated, so stored entries never change clan or join time. There is no atomicity
    /// across players; the first failure stops the batch and players written before it
    /// stay written.
    ///
    /// # Arguments
    /// - `players` - Players to write, in any order
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of players written
    /// - `Err(DbErr)` - Database error; the failing player's transaction is rolled back
    pub async fn bulk_upsert(&self, players: &[Player]) -> Result<usize, DbErr> {
        for player in players {
            let txn = self.db.begin().await?;
            Self::upsert_in(&txn, player).await?;
            txn.commit().await?;
        }

        Ok(players.len())
    }

    async fn upsert_in(txn: &DatabaseTransaction, player: &Player) -> Result<(), DbErr> {
        let account_id = player.account_id as i64;

        entity::prelude::Player::insert(entity::player::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            account_name: ActiveValue::Set(player.account_name.clone()),
            account_name_lower: ActiveValue::Set(player.account_name.to_lowercase()),
            has_clan: ActiveValue::Set(player.has_clan),
        })
        .on_conflict(
            OnConflict::column(entity::player::Column::AccountId)
                .update_columns([
                    entity::player::Column::AccountName,
                    entity::player::Column::AccountNameLower,
                    entity::player::Column::HasClan,
                ])
                .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

        entity::prelude::PlayerHistory::insert_many(player.history().iter().enumerate().map(
            |(position, entry)| entity::player_history::ActiveModel {
                account_id: ActiveValue::Set(account_id),
                position: ActiveValue::Set(position as i32),
                clan_id: ActiveValue::Set(entry.clan_id as i64),
                clan_name: ActiveValue::Set(entry.clan_name.clone()),
                created_at: ActiveValue::Set(entry.created_at),
                last_seen: ActiveValue::Set(entry.last_seen),
            },
        ))
        .on_conflict(
            OnConflict::columns([
                entity::player_history::Column::AccountId,
                entity::player_history::Column::Position,
            ])
            .update_column(entity::player_history::Column::LastSeen)
            .to_owned(),
        )
        .exec_without_returning(txn)
        .await?;

        Ok(())
    }

    /// Starts a lazy walk over every stored player.
    ///
    /// Each call returns an independent cursor starting from the lowest account id.
    ///
    /// # Arguments
    /// - `page_size` - Players loaded per page
    pub fn iterate_all(&self, page_size: u64) -> PlayerPages<'a> {
        PlayerPages {
            repo: PlayerRepository::new(self.db),
            page_size: page_size.max(1),
            after: None,
            done: false,
        }
    }

    /// Flags the given accounts as not belonging to any clan.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of player rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_clanless(&self, account_ids: &[u64]) -> Result<u64, DbErr> {
        self.set_has_clan(account_ids, false).await
    }

    /// Flags the given accounts as members of a clan again.
    ///
    /// Used by the orphan sweep for players a stored roster contains but whose own row
    /// was left clanless.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of player rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_in_clan(&self, account_ids: &[u64]) -> Result<u64, DbErr> {
        self.set_has_clan(account_ids, true).await
    }

    async fn set_has_clan(&self, account_ids: &[u64], has_clan: bool) -> Result<u64, DbErr> {
        if account_ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = account_ids.iter().map(|id| *id as i64).collect();
        let result = entity::prelude::Player::update_many()
            .filter(entity::player::Column::AccountId.is_in(ids))
            .col_expr(entity::player::Column::HasClan, Expr::value(has_clan))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts stored players.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    async fn with_history(&self, entity: entity::player::Model) -> Result<Player, AppError> {
        let history = entity::prelude::PlayerHistory::find()
            .filter(entity::player_history::Column::AccountId.eq(entity.account_id))
            .all(self.db)
            .await?;

        Ok(Player::from_entity(entity, history)?)
    }

    async fn attach_history(
        &self,
        players: Vec<entity::player::Model>,
        ids: Vec<i64>,
    ) -> Result<HashMap<u64, Player>, DbErr> {
        let mut history_by_account: HashMap<i64, Vec<entity::player_history::Model>> =
            HashMap::new();
        for row in entity::prelude::PlayerHistory::find()
            .filter(entity::player_history::Column::AccountId.is_in(ids))
            .all(self.db)
            .await?
        {
            history_by_account
                .entry(row.account_id)
                .or_default()
                .push(row);
        }

        let mut found = HashMap::with_capacity(players.len());
        for entity in players {
            let history = history_by_account
                .remove(&entity.account_id)
                .unwrap_or_default();
            match Player::from_entity(entity, history) {
                Ok(player) => {
                    found.insert(player.account_id, player);
                }
                Err(e) => tracing::warn!("Skipping stored player: {}", e),
            }
        }

        Ok(found)
    }
}

/// Keyset cursor over all stored players in ascending account id order.
///
/// Paging by the last seen account id keeps the walk stable while the sweep updates
/// `has_clan` on rows it has already visited.
pub struct PlayerPages<'a> {
    repo: PlayerRepository<'a>,
    page_size: u64,
    after: Option<i64>,
    done: bool,
}

impl<'a> PlayerPages<'a> {
    /// Loads the next page of players.
    ///
    /// # Returns
    /// - `Ok(Some(players))` - The next non-empty page
    /// - `Ok(None)` - Every player has been returned
    /// - `Err(DbErr)` - Database error; the cursor may be retried
    pub async fn next_page(&mut self) -> Result<Option<Vec<Player>>, DbErr> {
        if self.done {
            return Ok(None);
        }

        let mut query =
            entity::prelude::Player::find().order_by_asc(entity::player::Column::AccountId);
        if let Some(after) = self.after {
            query = query.filter(entity::player::Column::AccountId.gt(after));
        }
        let players = query.limit(self.page_size).all(self.repo.db).await?;

        if (players.len() as u64) < self.page_size {
            self.done = true;
        }
        let Some(last) = players.last() else {
            self.done = true;
            return Ok(None);
        };
        self.after = Some(last.account_id);

        let ids: Vec<i64> = players.iter().map(|p| p.account_id).collect();
        let mut by_id = self.repo.attach_history(players, ids.clone()).await?;

        Ok(Some(
            ids.into_iter()
                .filter_map(|id| by_id.remove(&(id as u64)))
                .collect(),
        ))
    }
}
