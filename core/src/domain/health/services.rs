use crate::domain::{
    authentication::ports::TokenVerifier,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<RR, LLM, TV, HC> HealthCheckService for Service<RR, LLM, TV, HC>
where
    RR: RecipeRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let status = self.health_check_repository.readiness().await?;

        if !status.healthy {
            return Err(CoreError::ServiceUnavailable(
                status
                    .error
                    .unwrap_or_else(|| "database is not ready".to_string()),
            ));
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::MockTokenVerifier,
        common::policies::LarderPolicy,
        health::ports::MockHealthCheckRepository,
        recipe::{
            policies::GenerationAccess,
            ports::{MockLLMClient, MockRecipeRepository},
        },
    };

    fn service_with(
        health: MockHealthCheckRepository,
    ) -> Service<MockRecipeRepository, MockLLMClient, MockTokenVerifier, MockHealthCheckRepository>
    {
        Service::new(
            MockRecipeRepository::new(),
            MockLLMClient::new(),
            MockTokenVerifier::new(),
            health,
            LarderPolicy::new(GenerationAccess::Public),
        )
    }

    #[tokio::test]
    async fn unhealthy_database_is_reported_unavailable() {
        let mut health = MockHealthCheckRepository::new();
        health.expect_readiness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    healthy: false,
                    latency_ms: 0,
                    error: Some("connection refused".to_string()),
                })
            })
        });

        let result = service_with(health).readiness().await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::ServiceUnavailable("connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn healthy_database_is_ready() {
        let mut health = MockHealthCheckRepository::new();
        health.expect_readiness().returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    healthy: true,
                    latency_ms: 3,
                    error: None,
                })
            })
        });

        let status = service_with(health).readiness().await.unwrap();

        assert!(status.healthy);
        assert_eq!(status.latency_ms, 3);
    }
}
