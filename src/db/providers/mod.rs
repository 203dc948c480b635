//! Storage backends, chosen by the scheme of the configured database URL.

mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;

pub use registry::{DbProvider, DbProviderId, DbProviders};

impl DbProviderId {
    /// Every backend compiled into this build.
    pub const ALL: [DbProviderId; 2] = [DbProviderId::Postgres, DbProviderId::Sqlite];

    fn provider(self) -> Arc<dyn DbProvider> {
        match self {
            DbProviderId::Postgres => Arc::new(postgres::PostgresDbProvider),
            DbProviderId::Sqlite => Arc::new(sqlite::SqliteDbProvider),
        }
    }
}

pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviderId::ALL
        .into_iter()
        .try_fold(DbProviders::new(), |providers, id| {
            providers.with_provider(id.provider())
        })
}
