use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::LarderPolicy},
    recipe::ports::RecipePolicy,
};

/// Who may call the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationAccess {
    /// Anyone, signed in or not.
    #[default]
    Public,
    /// Only callers with a verified identity.
    Authenticated,
}

impl RecipePolicy for LarderPolicy {
    async fn can_generate_recipe(&self, identity: Option<Identity>) -> Result<bool, CoreError> {
        match (self.generation_access, identity) {
            (GenerationAccess::Public, _) => Ok(true),
            (GenerationAccess::Authenticated, Some(_)) => Ok(true),
            (GenerationAccess::Authenticated, None) => Err(CoreError::Unauthenticated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::authentication::value_objects::UserIdentity;

    fn identity() -> Identity {
        Identity::new(UserIdentity::from("user-1"), None)
    }

    #[tokio::test]
    async fn public_generation_allows_anonymous_callers() {
        let policy = LarderPolicy::new(GenerationAccess::Public);

        assert_eq!(policy.can_generate_recipe(None).await, Ok(true));
        assert_eq!(policy.can_generate_recipe(Some(identity())).await, Ok(true));
    }

    #[tokio::test]
    async fn authenticated_generation_requires_identity() {
        let policy = LarderPolicy::new(GenerationAccess::Authenticated);

        assert_eq!(
            policy.can_generate_recipe(None).await,
            Err(CoreError::Unauthenticated)
        );
        assert_eq!(policy.can_generate_recipe(Some(identity())).await, Ok(true));
    }
}
