use axum::extract::State;
use larder_core::domain::recipe::policies::GenerationAccess;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Settings a front end needs before the first request.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AppConfig {
    pub app_version: String,
    pub llm_model: String,
    pub generation_access: GenerationAccess,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Get public configuration",
    responses(
        (status = 200, body = AppConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Response<AppConfig> {
    Response::OK(AppConfig {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        llm_model: state.args.llm.llm_model.clone(),
        generation_access: state.service.policy().generation_access(),
    })
}
