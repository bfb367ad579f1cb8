//! Clan factory for creating stored clans together with their member rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test clans with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::clan::ClanFactory;
///
/// let clan = ClanFactory::new(&db)
///     .clan_id(9)
///     .name("Bar")
///     .member_ids(vec![42, 43])
///     .build()
///     .await?;
/// ```
pub struct ClanFactory<'a> {
    db: &'a DatabaseConnection,
    clan_id: i64,
    name: String,
    tag: String,
    member_ids: Vec<i64>,
}

impl<'a> ClanFactory<'a> {
    /// Creates a new ClanFactory with default values.
    ///
    /// Defaults:
    /// - clan_id: auto-incremented
    /// - name: `"Clan {id}"`
    /// - tag: `"C{id}"`
    /// - member_ids: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            clan_id: id as i64,
            name: format!("Clan {}", id),
            tag: format!("C{}", id),
            member_ids: Vec::new(),
        }
    }

    pub fn clan_id(mut self, clan_id: i64) -> Self {
        self.clan_id = clan_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the roster; `members_count` follows its length.
    pub fn member_ids(mut self, member_ids: Vec<i64>) -> Self {
        self.member_ids = member_ids;
        self
    }

    /// Builds and inserts the clan row and one `clan_member` row per member id.
    ///
    /// # Returns
    /// - `Ok(entity::clan::Model)` - Created clan entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::clan::Model, DbErr> {
        let clan = entity::clan::ActiveModel {
            clan_id: ActiveValue::Set(self.clan_id),
            name: ActiveValue::Set(self.name),
            tag: ActiveValue::Set(self.tag),
            members_count: ActiveValue::Set(self.member_ids.len() as i32),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        if !self.member_ids.is_empty() {
            entity::prelude::ClanMember::insert_many(self.member_ids.into_iter().map(
                |account_id| entity::clan_member::ActiveModel {
                    clan_id: ActiveValue::Set(clan.clan_id),
                    account_id: ActiveValue::Set(account_id),
                },
            ))
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(clan)
    }
}

/// Creates a clan with the given id and roster.
///
/// Shorthand for `ClanFactory::new(db).clan_id(clan_id).member_ids(member_ids).build().await`.
pub async fn create_clan(
    db: &DatabaseConnection,
    clan_id: i64,
    member_ids: Vec<i64>,
) -> Result<entity::clan::Model, DbErr> {
    ClanFactory::new(db)
        .clan_id(clan_id)
        .member_ids(member_ids)
        .build()
        .await
}
