use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

use crate::core::config::DatabaseConfig;
use crate::storage::query_log::QueryLogger;

pub const HEALTH_CHECK_SQL: &str = "select datetime('now')";

#[derive(Debug)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("Connecting to database: {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);
        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .min_connections(1);

        // An in-memory database lives only as long as its connection.
        if config.url.contains(":memory:") || config.url.contains("mode=memory") {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Round-trip a trivial statement to prove the database is reachable.
    pub async fn ping(&self, log: &QueryLogger) -> Result<(), sqlx::Error> {
        log.fetch_all::<_, (String,)>(&self.pool, HEALTH_CHECK_SQL, &[])
            .await
            .map(|_| ())
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
