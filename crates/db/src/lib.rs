//! Database layer for tanzconnect.

pub mod entities;
pub mod migrations;
pub mod repositories;
pub mod test_utils;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tanzconnect_common::{AppError, Config};
use tracing::log::LevelFilter;

/// Open the connection pool described by the database section of [`Config`].
///
/// All pool tuning comes from configuration so deployments can adjust it
/// without a rebuild.
pub async fn init(config: &Config) -> Result<DatabaseConnection, AppError> {
    let db = &config.database;

    let mut opt = ConnectOptions::new(&db.url);
    opt.max_connections(db.max_connections)
        .min_connections(db.min_connections)
        .connect_timeout(Duration::from_secs(db.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(db.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(db.max_lifetime_secs))
        .sqlx_logging(true)
        .sqlx_logging_level(LevelFilter::Debug);

    Database::connect(opt)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}

/// Run pending migrations.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), AppError> {
    use sea_orm_migration::MigratorTrait;
    migrations::Migrator::up(db, None)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}
