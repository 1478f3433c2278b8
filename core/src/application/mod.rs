use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{
        LarderConfig, entities::app_errors::CoreError, policies::LarderPolicy, services::Service,
    },
    infrastructure::{
        authentication::JwtTokenVerifier,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        llm::OpenAiLLMClient,
        recipe::PostgresRecipeRepository,
    },
};

pub type LarderService = Service<
    PostgresRecipeRepository,
    OpenAiLLMClient,
    JwtTokenVerifier,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, runs migrations and wires every adapter.
pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(build_service(postgres.get_db(), &config)?)
}

/// Wires the adapters around an existing connection.
pub fn build_service(
    db: Arc<DatabaseConnection>,
    config: &LarderConfig,
) -> Result<LarderService, CoreError> {
    let recipe_repository = PostgresRecipeRepository::new(db.clone());
    let health_check_repository = PostgresHealthCheckRepository::new(db);
    let llm_client = OpenAiLLMClient::new(&config.llm)?;
    let token_verifier = JwtTokenVerifier::new(&config.auth);

    Ok(Service::new(
        recipe_repository,
        llm_client,
        token_verifier,
        health_check_repository,
        LarderPolicy::new(config.auth.generation_access),
    ))
}
