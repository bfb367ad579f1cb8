pub use sea_orm_migration::prelude::*;

mod m20261012_000001_create_clan_table;
mod m20261012_000002_create_clan_member_table;
mod m20261012_000003_create_player_table;
mod m20261012_000004_create_player_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261012_000001_create_clan_table::Migration),
            Box::new(m20261012_000002_create_clan_member_table::Migration),
            Box::new(m20261012_000003_create_player_table::Migration),
            Box::new(m20261012_000004_create_player_history_table::Migration),
        ]
    }
}
