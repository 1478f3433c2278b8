use std::future::Future;

use crate::domain::{
    authentication::entities::{AuthorizeRequestInput, AuthorizeRequestOutput, JwtClaim},
    common::entities::app_errors::CoreError,
};

/// Verifies bearer tokens minted by the external identity provider.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;
}
