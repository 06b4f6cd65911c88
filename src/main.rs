mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    service::ban::{cache::BanCache, BanService},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quest_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let shards = startup::connect_to_partitions(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let id_generator = startup::setup_id_generator(&config, http_client);

    // Bans written by other processes are only picked up here and on /initialize.
    let ban_cache = BanCache::new();
    BanService::new(&shards, &ban_cache).reload_cache().await?;

    let state = AppState::new(shards, id_generator, ban_cache, config.admin_token.clone());

    let app = router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}
