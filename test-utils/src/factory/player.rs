//! Player factory for creating stored players with a membership history.

use crate::factory::helpers::{next_id, timestamp};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

struct HistoryRow {
    clan_id: i64,
    clan_name: String,
    created_at: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

/// Factory for creating test players with customizable fields.
///
/// History entries are stored in the order they are added.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .account_id(42)
///     .account_name("Alice")
///     .history_entry(7, "Foo", 1000)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i64,
    account_name: String,
    has_clan: bool,
    history: Vec<HistoryRow>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - account_id: auto-incremented
    /// - account_name: `"Player{id}"`
    /// - has_clan: `true`
    /// - history: empty (add at least one entry for a valid stored player)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            account_id: id as i64,
            account_name: format!("Player{}", id),
            has_clan: true,
            history: Vec::new(),
        }
    }

    pub fn account_id(mut self, account_id: i64) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = account_name.into();
        self
    }

    pub fn has_clan(mut self, has_clan: bool) -> Self {
        self.has_clan = has_clan;
        self
    }

    /// Appends a history entry joined at `created_at` (Unix seconds), last seen now.
    pub fn history_entry(
        mut self,
        clan_id: i64,
        clan_name: impl Into<String>,
        created_at: i64,
    ) -> Self {
        self.history.push(HistoryRow {
            clan_id,
            clan_name: clan_name.into(),
            created_at: timestamp(created_at),
            last_seen: Utc::now(),
        });
        self
    }

    /// Builds and inserts the player row followed by its history rows.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            account_id: ActiveValue::Set(self.account_id),
            account_name_lower: ActiveValue::Set(self.account_name.to_lowercase()),
            account_name: ActiveValue::Set(self.account_name),
            has_clan: ActiveValue::Set(self.has_clan),
        }
        .insert(self.db)
        .await?;

        if !self.history.is_empty() {
            entity::prelude::PlayerHistory::insert_many(self.history.into_iter().enumerate().map(
                |(position, row)| entity::player_history::ActiveModel {
                    account_id: ActiveValue::Set(player.account_id),
                    position: ActiveValue::Set(position as i32),
                    clan_id: ActiveValue::Set(row.clan_id),
                    clan_name: ActiveValue::Set(row.clan_name),
                    created_at: ActiveValue::Set(row.created_at),
                    last_seen: ActiveValue::Set(row.last_seen),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(player)
    }
}

/// Creates a clan member player with a single history entry for `clan_id`.
pub async fn create_player(
    db: &DatabaseConnection,
    account_id: i64,
    clan_id: i64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db)
        .account_id(account_id)
        .history_entry(clan_id, format!("Clan {}", clan_id), 1_000)
        .build()
        .await
}
