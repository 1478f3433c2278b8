use crate::application::auth::OptionalIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use larder_core::domain::recipe::entities::Recipe;
use larder_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List saved recipes",
    description = "Returns the caller's recipes, newest first. Anonymous callers get an empty list.",
    responses(
        (status = 200, body = ListRecipesResponse)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: recipes }))
}
