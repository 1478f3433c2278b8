use serde::{Deserialize, Serialize};

use crate::domain::authentication::value_objects::{Identity, UserIdentity};

/// Claims the API relies on. Registered claims such as `aud` are validated
/// by the verifier and not kept here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<JwtClaim> for Identity {
    fn from(claims: JwtClaim) -> Self {
        Identity::new(UserIdentity::from(claims.sub), claims.email)
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestOutput {
    pub identity: Identity,
}
