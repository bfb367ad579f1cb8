use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000001_create_clan_table::Clan;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanMember::Table)
                    .if_not_exists()
                    .col(big_integer(ClanMember::ClanId))
                    .col(big_integer(ClanMember::AccountId))
                    .primary_key(
                        Index::create()
                            .col(ClanMember::ClanId)
                            .col(ClanMember::AccountId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_member_clan_id")
                            .from(ClanMember::Table, ClanMember::ClanId)
                            .to(Clan::Table, Clan::ClanId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Orphan detection looks members up by account id once per stored player.
        manager
            .create_index(
                Index::create()
                    .name("idx_clan_member_account_id")
                    .table(ClanMember::Table)
                    .col(ClanMember::AccountId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClanMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanMember {
    Table,
    ClanId,
    AccountId,
}
