mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::clan_sync, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dotenvy::from_filename_override(".env.local").ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let sync = startup::setup_sync_service(&config, &db)?;

    tracing::info!("Starting server");

    let _scheduler = clan_sync::start_scheduler(sync.clone(), &config.sync.schedule).await?;

    if config.sync.on_startup {
        let sync = sync.clone();
        tokio::spawn(async move {
            sync.run().await;
        });
    }

    let app = router::router().with_state(AppState::new(db));
    let listener = TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
