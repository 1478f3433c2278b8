use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use larder_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// JSON body returned for every error.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "E_INTERNAL_SERVER_ERROR")
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            ApiError::ValidationError(_) => (StatusCode::BAD_REQUEST, "E_VALIDATION"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "E_FORBIDDEN"),
            ApiError::GenerationFailed(_) => (StatusCode::BAD_GATEWAY, "E_GENERATION_FAILED"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "E_SERVICE_UNAVAILABLE")
            }
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::InternalServerError(m)
            | ApiError::BadRequest(m)
            | ApiError::ValidationError(m)
            | ApiError::Unauthorized(m)
            | ApiError::Forbidden(m)
            | ApiError::GenerationFailed(m)
            | ApiError::ServiceUnavailable(m) => m.clone(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Unauthenticated => {
                ApiError::Unauthorized("Authentication required".to_string())
            }
            CoreError::InvalidToken => ApiError::Unauthorized("Invalid token".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            // The upstream detail stays in the logs.
            e if e.is_generation_error() => {
                error!("recipe generation failed: {}", e);
                ApiError::GenerationFailed("Failed to generate recipe".to_string())
            }
            CoreError::ServiceUnavailable(message) => ApiError::ServiceUnavailable(message),
            _ => ApiError::InternalServerError("Internal server error".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// `Json<T>` that also runs the `validator` rules of `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_errors_become_bad_gateway() {
        for error in [
            CoreError::EmptyCompletion,
            CoreError::InvalidCompletion("missing title".to_string()),
            CoreError::ExternalServiceError("timeout".to_string()),
        ] {
            let api_error = ApiError::from(error);
            assert_eq!(
                api_error,
                ApiError::GenerationFailed("Failed to generate recipe".to_string())
            );
            assert_eq!(api_error.status_and_code().0, StatusCode::BAD_GATEWAY);
        }
    }

    #[test]
    fn unauthenticated_becomes_unauthorized() {
        let (status, code) = ApiError::from(CoreError::Unauthenticated).status_and_code();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(code, "E_UNAUTHORIZED");
    }

    #[test]
    fn internal_errors_hide_details() {
        assert_eq!(
            ApiError::from(CoreError::InternalServerError),
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }
}
