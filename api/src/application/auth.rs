use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use larder_core::domain::authentication::{
    entities::AuthorizeRequestInput, ports::AuthService, value_objects::Identity,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::http::server::{api_entities::api_error::ApiErrorResponse, app_state::AppState};

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token not found")]
    TokenNotFound,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED", "Invalid token")
            }
            AuthError::TokenNotFound => (
                StatusCode::UNAUTHORIZED,
                "E_UNAUTHORIZED",
                "Token not found",
            ),
        };

        let body = ApiErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

async fn extract_token_from_bearer(parts: &mut Parts) -> Option<String> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .ok()?;

    let token = bearer.token().trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Verifies the bearer token when one is present and stores the resulting
/// [`Identity`] in the request extensions. Requests without a valid token
/// continue anonymously; handlers decide whether that is acceptable.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Some(token) = extract_token_from_bearer(&mut parts).await {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => debug!("continuing without identity: {}", e),
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Identity of a caller that must be signed in.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        match extract_token_from_bearer(parts).await {
            Some(_) => Err(AuthError::InvalidToken),
            None => Err(AuthError::TokenNotFound),
        }
    }
}

/// Identity of the caller if a valid token was sent.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
