use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_integer(Player::AccountId).primary_key())
                    .col(string(Player::AccountName))
                    .col(string(Player::AccountNameLower))
                    .col(boolean(Player::HasClan).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_account_name")
                    .table(Player::Table)
                    .col(Player::AccountName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_account_name_lower")
                    .table(Player::Table)
                    .col(Player::AccountNameLower)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    AccountId,
    AccountName,
    AccountNameLower,
    HasClan,
}
