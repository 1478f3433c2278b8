use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: Arc<DatabaseConnection>,
}

impl Postgres {
    /// Connects and applies the embedded migrations.
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.database_url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("database migrations applied");

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}
