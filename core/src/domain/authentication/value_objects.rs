use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opaque user identifier issued by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserIdentity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Caller identity attached to a request once its bearer token is verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserIdentity,
    email: Option<String>,
}

impl Identity {
    pub fn new(user_id: UserIdentity, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    pub fn id(&self) -> &UserIdentity {
        &self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
