use crate::application::http::{
    authentication::router::AuthenticationApiDoc, health::router::HealthApiDoc,
    recipe::router::RecipeApiDoc, server::config::__path_get_config,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    paths(get_config),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/me", api = AuthenticationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
