use tracing::{info, instrument};

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    health::ports::HealthCheckRepository,
    recipe::{
        entities::{GeneratedDraft, Recipe},
        helpers::{build_recipe_prompt, parse_generated_draft},
        ports::{LLMClient, RecipePolicy, RecipeRepository, RecipeService},
        value_objects::{GenerateRecipeInput, SaveRecipeInput},
    },
};

impl<RR, LLM, TV, HC> RecipeService for Service<RR, LLM, TV, HC>
where
    RR: RecipeRepository,
    LLM: LLMClient,
    TV: TokenVerifier,
    HC: HealthCheckRepository,
{
    #[instrument(skip_all, fields(ingredient_count = input.ingredients.len()))]
    async fn generate_recipe(
        &self,
        identity: Option<Identity>,
        input: GenerateRecipeInput,
    ) -> Result<GeneratedDraft, CoreError> {
        // 1. Check access
        ensure_policy(
            self.policy.can_generate_recipe(identity).await,
            "insufficient permissions to generate recipes",
        )?;

        // 2. Build prompt
        let prompt = build_recipe_prompt(&input.ingredients);

        // 3. Call LLM
        let raw_response = self.llm_client.generate_with_text(prompt).await?;

        // 4. Parse, no repair and no partial drafts
        parse_generated_draft(&raw_response)
    }

    #[instrument(skip_all)]
    async fn save_recipe(
        &self,
        identity: Option<Identity>,
        input: SaveRecipeInput,
    ) -> Result<Recipe, CoreError> {
        let identity = identity.ok_or(CoreError::Unauthenticated)?;

        let recipe = Recipe::new(
            identity.id().clone(),
            input.title,
            input.ingredients,
            input.instructions,
        );

        let created = self.recipe_repository.create_recipe(recipe).await?;
        info!(recipe_id = %created.id, owner = %created.owner, "recipe saved");

        Ok(created)
    }

    #[instrument(skip_all)]
    async fn list_recipes(&self, identity: Option<Identity>) -> Result<Vec<Recipe>, CoreError> {
        let Some(identity) = identity else {
            return Ok(Vec::new());
        };

        self.recipe_repository
            .fetch_recipes_by_owner(identity.id().clone())
            .await
    }
}
