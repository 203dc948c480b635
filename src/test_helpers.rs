use std::sync::Arc;

use axum::Router;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    middleware::catch_panic_layer,
    routes::router,
    state::AppState,
};

/// A private SQLite database lives only as long as its single connection.
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

pub async fn test_state() -> anyhow::Result<Arc<AppState>> {
    let database = DatabaseConfig {
        url: MEMORY_DATABASE_URL.to_string(),
        max_connections: 1,
        min_idle: 1,
    };
    let db = connection::connect(&database).await?;
    let cfg = AppConfig {
        database,
        ..AppConfig::default()
    };
    Ok(AppState::new(cfg, db))
}

/// The full application stack over `state`, as `main` serves it.
pub fn test_router(state: &Arc<AppState>) -> Router {
    router(Arc::clone(state)).layer(catch_panic_layer())
}
