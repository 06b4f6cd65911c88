use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config, error::AppError, service::id::IdGenerator, shard::ShardRouter,
};

/// Connects to a single partition and runs pending migrations.
///
/// # Arguments
/// - `url` - Connection string of the partition
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected partition with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to the database or run migrations
async fn connect_to_partition(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connects to every configured partition and builds the shard router.
///
/// Partitions keep the order they were configured in, which is the order the router maps
/// user IDs onto.
///
/// # Arguments
/// - `config` - Application configuration containing the partition URLs
///
/// # Returns
/// - `Ok(ShardRouter)` - Router over all partitions, each migrated
/// - `Err(AppError)` - A partition could not be reached or migrated
pub async fn connect_to_partitions(config: &Config) -> Result<ShardRouter, AppError> {
    let mut partitions = Vec::with_capacity(config.database_urls.len());

    for (index, url) in config.database_urls.iter().enumerate() {
        partitions.push(connect_to_partition(url).await?);
        tracing::info!(index, "Partition connected");
    }

    Ok(ShardRouter::new(partitions)?)
}

/// Builds the HTTP client used for ID delegation.
///
/// Redirects are disabled so a misconfigured root URL fails loudly instead of being
/// followed elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the ID generator, delegating to the root node when one is configured.
pub fn setup_id_generator(config: &Config, client: reqwest::Client) -> IdGenerator {
    match &config.id_root_url {
        Some(url) => {
            tracing::info!(root = %url, "Delegating ID generation to root node");
            IdGenerator::with_root(url.clone(), client)
        }
        None => IdGenerator::local(),
    }
}
