use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("No recipe generated")]
    EmptyCompletion,

    #[error("Invalid recipe returned by completion service: {0}")]
    InvalidCompletion(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Errors raised while producing a draft, as opposed to storage or auth failures.
    pub fn is_generation_error(&self) -> bool {
        matches!(
            self,
            CoreError::EmptyCompletion
                | CoreError::InvalidCompletion(_)
                | CoreError::ExternalServiceError(_)
        )
    }
}
