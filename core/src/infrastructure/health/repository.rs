use std::{sync::Arc, time::Instant};

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn ping(&self) -> Result<u64, sea_orm::DbErr> {
        let started = Instant::now();
        self.db
            .execute(Statement::from_string(
                DatabaseBackend::Postgres,
                "SELECT 1".to_string(),
            ))
            .await?;

        Ok(started.elapsed().as_millis() as u64)
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let status = match self.ping().await {
            Ok(latency_ms) => DatabaseHealthStatus {
                healthy: true,
                latency_ms,
                error: None,
            },
            Err(e) => {
                error!("Database readiness check failed: {}", e);
                DatabaseHealthStatus {
                    healthy: false,
                    latency_ms: 0,
                    error: Some(e.to_string()),
                }
            }
        };

        Ok(status)
    }
}
