use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use tracing::debug;

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenVerifier},
    common::{AuthConfig, entities::app_errors::CoreError},
};

/// HS256 verifier for tokens minted by the external identity provider.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }

        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => debug!("rejecting expired token"),
                    kind => debug!("rejecting token: {:?}", kind),
                }
                CoreError::InvalidToken
            })
    }
}
