use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::response::Response;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetMeResponse {
    pub data: CurrentUser,
}

#[utoipa::path(
    get,
    path = "",
    tag = "auth",
    summary = "Get current user",
    description = "Returns the identity carried by the bearer token.",
    responses(
        (status = 200, body = GetMeResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
)]
pub async fn get_me(RequiredIdentity(identity): RequiredIdentity) -> Response<GetMeResponse> {
    Response::OK(GetMeResponse {
        data: CurrentUser {
            user_id: identity.id().to_string(),
            email: identity.email().map(str::to_string),
        },
    })
}
