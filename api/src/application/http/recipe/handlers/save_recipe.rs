use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::SaveRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::recipe::entities::Recipe;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::SaveRecipeInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Save recipe",
    description = "Stores a recipe owned by the caller. Saving the same recipe twice stores two records.",
    responses(
        (status = 201, body = SaveRecipeResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    request_body = SaveRecipeValidator
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SaveRecipeValidator>,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .save_recipe(
            Some(identity),
            SaveRecipeInput {
                title: payload.title,
                ingredients: payload.ingredients,
                instructions: payload.instructions,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SaveRecipeResponse { data: recipe }))
}
