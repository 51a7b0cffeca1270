use std::sync::Arc;
use std::time::Duration;

use medley_api::{setup, state::AppState, telemetry};
use medley_core::{Config, PostStore};
use medley_db::PostRepository;
use medley_services::{PostService, VideoResolver, YoutubeResolver};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.base.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.base.db_timeout_seconds))
        .connect(config.database_url())
        .await?;

    sqlx::migrate!("../medley-db/migrations").run(&pool).await?;

    let store: Arc<dyn PostStore> = Arc::new(PostRepository::new(pool));
    let resolver: Arc<dyn VideoResolver> = Arc::new(YoutubeResolver::new(&config.resolver)?);
    let state = Arc::new(AppState::new(PostService::new(store, resolver)));

    let router = setup::build_router(&config, state)?;

    setup::start_server(&config, router).await?;

    Ok(())
}
