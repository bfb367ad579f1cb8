use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, dispatch::RateLimitedDispatcher, error::AppError,
    service::sync::SyncService, wot::WotApiClient,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the clan and player tables and their indexes
/// exist before the first sync pass or request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the sync service with the configured API client and rate limits.
///
/// # Returns
/// - `Ok(Arc<SyncService>)` - Service shared by the scheduler and the startup pass
/// - `Err(AppError::WotApiErr)` - The HTTP client could not be built
pub fn setup_sync_service(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<Arc<SyncService<RateLimitedDispatcher>>, AppError> {
    let client = WotApiClient::new(&config.api)?;
    let dispatcher =
        RateLimitedDispatcher::new(config.sync.max_concurrent, config.sync.requests_per_second);

    Ok(Arc::new(SyncService::new(
        db.clone(),
        client,
        dispatcher,
        &config.sync,
    )))
}
