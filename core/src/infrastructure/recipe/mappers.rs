use tracing::error;

use crate::{
    domain::{authentication::value_objects::UserIdentity, recipe::entities::Recipe},
    entity::recipes,
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        let ingredients: Vec<String> = serde_json::from_value(model.ingredients.clone())
            .unwrap_or_else(|e| {
                error!(recipe_id = %model.id, "Malformed ingredients column: {}", e);
                Vec::new()
            });

        Self {
            id: model.id,
            owner: UserIdentity::from(model.owner_id.clone()),
            title: model.title.clone(),
            ingredients,
            instructions: model.instructions.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}
