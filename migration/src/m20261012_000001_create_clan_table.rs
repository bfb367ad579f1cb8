use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clan::Table)
                    .if_not_exists()
                    .col(big_integer(Clan::ClanId).primary_key())
                    .col(string(Clan::Name))
                    .col(string(Clan::Tag))
                    .col(integer(Clan::MembersCount))
                    .col(timestamp_with_time_zone(Clan::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clan {
    Table,
    ClanId,
    Name,
    Tag,
    MembersCount,
    UpdatedAt,
}
