use crate::domain::{
    authentication::ports::TokenVerifier,
    common::policies::LarderPolicy,
    health::ports::HealthCheckRepository,
    recipe::ports::{LLMClient, RecipeRepository},
};

/// Aggregate service implementing every domain service trait over its ports.
#[derive(Clone)]
pub struct Service<RR, LLM, TV, HC>
where
    RR: RecipeRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    pub(crate) recipe_repository: RR,
    pub(crate) llm_client: LLM,
    pub(crate) token_verifier: TV,
    pub(crate) health_check_repository: HC,
    pub(crate) policy: LarderPolicy,
}

impl<RR, LLM, TV, HC> Service<RR, LLM, TV, HC>
where
    RR: RecipeRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    pub fn new(
        recipe_repository: RR,
        llm_client: LLM,
        token_verifier: TV,
        health_check_repository: HC,
        policy: LarderPolicy,
    ) -> Self {
        Self {
            recipe_repository,
            llm_client,
            token_verifier,
            health_check_repository,
            policy,
        }
    }

    pub fn policy(&self) -> &LarderPolicy {
        &self.policy
    }
}
