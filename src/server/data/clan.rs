//! Clan repository for database operations.
//!
//! This module provides the `ClanRepository` for storing clans and their rosters. A clan is
//! kept as one `clan` row plus one `clan_member` row per member account; the
//! `clan_member.account_id` index backs the membership lookup used by the orphan sweep.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::model::clan::Clan;

/// Repository providing database operations for clans.
pub struct ClanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanRepository<'a> {
    /// Creates a new ClanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a clan, replacing its stored representation wholesale.
    ///
    /// The clan row and its complete roster are written in one transaction: existing
    /// `clan_member` rows for the clan are deleted and the given member ids inserted, so a
    /// concurrent reader never observes a half-replaced roster. Duplicate member ids are
    /// stored once.
    ///
    /// # Arguments
    /// - `clan` - The clan as observed by the current pass
    ///
    /// # Returns
    /// - `Ok(())` - Clan and roster stored
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn upsert(&self, clan: &Clan) -> Result<(), DbErr> {
        let clan_id = clan.clan_id as i64;
        let txn = self.db.begin().await?;

        entity::prelude::Clan::insert(entity::clan::ActiveModel {
            clan_id: ActiveValue::Set(clan_id),
            name: ActiveValue::Set(clan.name.clone()),
            tag: ActiveValue::Set(clan.tag.clone()),
            members_count: ActiveValue::Set(clan.members_count as i32),
            updated_at: ActiveValue::Set(clan.updated_at),
        })
        .on_conflict(
            OnConflict::column(entity::clan::Column::ClanId)
                .update_columns([
                    entity::clan::Column::Name,
                    entity::clan::Column::Tag,
                    entity::clan::Column::MembersCount,
                    entity::clan::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        entity::prelude::ClanMember::delete_many()
            .filter(entity::clan_member::Column::ClanId.eq(clan_id))
            .exec(&txn)
            .await?;

        if !clan.member_ids.is_empty() {
            entity::prelude::ClanMember::insert_many(clan.member_ids.iter().map(|account_id| {
                entity::clan_member::ActiveModel {
                    clan_id: ActiveValue::Set(clan_id),
                    account_id: ActiveValue::Set(*account_id as i64),
                }
            }))
            .on_conflict(
                OnConflict::columns([
                    entity::clan_member::Column::ClanId,
                    entity::clan_member::Column::AccountId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
        }

        txn.commit().await
    }

    /// Finds a clan and its roster by clan id.
    ///
    /// # Returns
    /// - `Ok(Some(Clan))` - Clan found, member ids in ascending order
    /// - `Ok(None)` - No clan stored with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, clan_id: u64) -> Result<Option<Clan>, DbErr> {
        let Some(entity) = entity::prelude::Clan::find_by_id(clan_id as i64)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let members = entity::prelude::ClanMember::find()
            .filter(entity::clan_member::Column::ClanId.eq(entity.clan_id))
            .all(self.db)
            .await?;

        Ok(Some(Clan::from_entity(entity, members)))
    }

    /// Finds any stored clan whose roster contains the account.
    ///
    /// Existence check only; answered from the `clan_member.account_id` index without
    /// loading the clan.
    ///
    /// # Returns
    /// - `Ok(Some(clan_id))` - The account is a member of at least this clan
    /// - `Ok(None)` - No stored roster contains the account
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_clan_containing_member(&self, account_id: u64) -> Result<Option<u64>, DbErr> {
        let member = entity::prelude::ClanMember::find()
            .filter(entity::clan_member::Column::AccountId.eq(account_id as i64))
            .one(self.db)
            .await?;

        Ok(member.map(|m| m.clan_id as u64))
    }

    /// Counts stored clans.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Clan::find().count(self.db).await
    }
}
