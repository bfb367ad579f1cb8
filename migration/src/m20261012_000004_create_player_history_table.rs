use sea_orm_migration::{prelude::*, schema::*};

use super::m20261012_000003_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerHistory::Table)
                    .if_not_exists()
                    .col(big_integer(PlayerHistory::AccountId))
                    .col(integer(PlayerHistory::Position))
                    .col(big_integer(PlayerHistory::ClanId))
                    .col(string(PlayerHistory::ClanName))
                    .col(timestamp_with_time_zone(PlayerHistory::CreatedAt))
                    .col(timestamp_with_time_zone(PlayerHistory::LastSeen))
                    .primary_key(
                        Index::create()
                            .col(PlayerHistory::AccountId)
                            .col(PlayerHistory::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_history_account_id")
                            .from(PlayerHistory::Table, PlayerHistory::AccountId)
                            .to(Player::Table, Player::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerHistory {
    Table,
    AccountId,
    Position,
    ClanId,
    ClanName,
    CreatedAt,
    LastSeen,
}
