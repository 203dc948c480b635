use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::info;

use super::providers;
use crate::config::DatabaseConfig;

/// Registry path the schema sync scans for entities.
pub const ENTITY_REGISTRY: &str = "todo_anywhere::db::entities::*";

/// Opens the pool for `cfg.url` and creates any missing tables.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;
    info!(provider = provider.id().as_str(), "connecting to database");

    let db = provider
        .connect(cfg)
        .await
        .context("failed to connect to database")?;
    provider.post_connect(&db, cfg).await?;

    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY)
        .sync(&db)
        .await
        .context("failed to sync database schema")?;
    Ok(db)
}
