use std::sync::Arc;

use shopfront_core::config::{AppConfig, ConfigError, LoadOptions};
use shopfront_db::{connect_with_settings, migrations, DbPool, ProductReader, SqlProductStore};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub reader: ProductReader,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let db_pool = connect_with_settings(
        &config.database.url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await
    .map_err(BootstrapError::DatabaseConnect)?;
    info!(event_name = "system.bootstrap.database_connected", "database connection established");

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(event_name = "system.bootstrap.migrations_applied", "database migrations applied");

    let reader = ProductReader::new(Arc::new(SqlProductStore::new(db_pool.clone())));

    Ok(Application { config, db_pool, reader })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::config::{ConfigOverrides, LoadOptions};
    use shopfront_db::{SeedLoader, SqlProductStore, CATALOG_SEED};

    use crate::bootstrap::{bootstrap, BootstrapError};

    fn memory_options(url: &str) -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides {
                database_url: Some(url.to_string()),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_configuration() {
        let result = bootstrap(memory_options("postgres://localhost/shop")).await;

        let error = match result {
            Err(error) => error,
            Ok(_) => panic!("expected config error"),
        };
        assert!(matches!(error, BootstrapError::Config(_)));
        assert!(error.to_string().contains("database.url"));
    }

    #[tokio::test]
    async fn bootstrap_applies_migrations_and_exposes_the_read_path() {
        let app = bootstrap(memory_options("sqlite::memory:?cache=shared"))
            .await
            .expect("bootstrap should succeed against an in-memory database");

        let (table_count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'product'",
        )
        .fetch_one(&app.db_pool)
        .await
        .expect("product table should exist after bootstrap");
        assert_eq!(table_count, 1);

        let loader = SeedLoader::new(Arc::new(SqlProductStore::new(app.db_pool.clone())));
        loader.run().await.expect("seed catalog");

        let products = app.reader.list().await.expect("list products");
        assert_eq!(products.len(), CATALOG_SEED.len());
        assert_eq!(products[0].name, "Shirt");
    }
}
