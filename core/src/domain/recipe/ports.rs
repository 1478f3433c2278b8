use std::future::Future;

use crate::domain::{
    authentication::value_objects::{Identity, UserIdentity},
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{GeneratedDraft, Recipe},
        value_objects::{GenerateRecipeInput, SaveRecipeInput},
    },
};

/// Repository trait for persisted recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Every recipe owned by `owner`, newest first.
    fn fetch_recipes_by_owner(
        &self,
        owner: UserIdentity,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// LLM Client trait for calling the completion service
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends `prompt` as a single user message and returns the raw text of
    /// the first choice.
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation and storage
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        identity: Option<Identity>,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedDraft, CoreError>> + Send;

    fn save_recipe(
        &self,
        identity: Option<Identity>,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn list_recipes(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Policy trait for recipe authorization
pub trait RecipePolicy: Send + Sync {
    fn can_generate_recipe(
        &self,
        identity: Option<Identity>,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
