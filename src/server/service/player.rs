use sea_orm::DatabaseConnection;

use crate::server::{data::player::PlayerRepository, error::AppError, model::player::Player};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a player with their clan history by account name
    ///
    /// A case-sensitive match wins over a case-insensitive one.
    pub async fn get_by_name(&self, account_name: &str) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        repo.find_by_name(account_name).await
    }

    /// Counts stored players
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
