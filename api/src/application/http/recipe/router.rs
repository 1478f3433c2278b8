use super::handlers::generate_recipe::{__path_generate_recipe, generate_recipe};
use super::handlers::list_recipes::{__path_list_recipes, list_recipes};
use super::handlers::save_recipe::{__path_save_recipe, save_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, save_recipe, list_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            get(list_recipes).post(save_recipe),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
