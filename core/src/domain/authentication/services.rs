use tracing::debug;

use crate::domain::{
    authentication::{
        entities::{AuthorizeRequestInput, AuthorizeRequestOutput},
        ports::{AuthService, TokenVerifier},
        value_objects::Identity,
    },
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    recipe::ports::{LLMClient, RecipeRepository},
};

impl<RR, LLM, TV, HC> AuthService for Service<RR, LLM, TV, HC>
where
    RR: RecipeRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_verifier.verify(&input.token)?;

        if claims.sub.trim().is_empty() {
            debug!("rejecting token without subject");
            return Err(CoreError::InvalidToken);
        }

        Ok(AuthorizeRequestOutput {
            identity: Identity::from(claims),
        })
    }
}
