use sea_orm::DatabaseConnection;

use crate::server::{data::clan::ClanRepository, error::AppError, model::clan::Clan};

pub struct ClanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a stored clan and its roster by clan id
    pub async fn get_by_id(&self, clan_id: u64) -> Result<Option<Clan>, AppError> {
        let repo = ClanRepository::new(self.db);

        Ok(repo.find_by_id(clan_id).await?)
    }

    /// Counts stored clans
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = ClanRepository::new(self.db);

        Ok(repo.count().await?)
    }
}
