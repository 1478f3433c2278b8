use crate::application::auth::OptionalIdentity;
use crate::application::http::recipe::validators::GenerateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::recipe::entities::GeneratedDraft;
use larder_core::domain::recipe::ports::RecipeService;
use larder_core::domain::recipe::value_objects::GenerateRecipeInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: GeneratedDraft,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Asks the completion service for a recipe using the given ingredients. Nothing is stored.",
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, description = "Malformed request"),
        (status = 401, description = "Sign-in required by the generation policy"),
        (status = 502, description = "The completion service failed or returned an unusable recipe")
    ),
    request_body = GenerateRecipeValidator
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let draft = state
        .service
        .generate_recipe(
            identity,
            GenerateRecipeInput {
                ingredients: payload.into_ingredients(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse { data: draft }))
}
