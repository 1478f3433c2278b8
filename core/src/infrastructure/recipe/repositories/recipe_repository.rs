use std::sync::Arc;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;

use crate::{
    domain::{
        authentication::value_objects::UserIdentity,
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::recipes::{
        ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresRecipeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let ingredients_json = serde_json::to_value(&recipe.ingredients).map_err(|e| {
            error!("Failed to serialize ingredients: {}", e);
            CoreError::InternalServerError
        })?;

        let created = RecipeEntity::insert(RecipeActiveModel {
            id: Set(recipe.id),
            owner_id: Set(recipe.owner.to_string()),
            title: Set(recipe.title),
            ingredients: Set(ingredients_json),
            instructions: Set(recipe.instructions),
            created_at: Set(recipe.created_at.fixed_offset()),
        })
        .exec_with_returning(self.db.as_ref())
        .await
        .map(Recipe::from)
        .map_err(|e| {
            error!("Failed to create recipe: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn fetch_recipes_by_owner(&self, owner: UserIdentity) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .filter(RecipeColumn::OwnerId.eq(owner.as_str()))
            .order_by_desc(RecipeColumn::CreatedAt)
            .order_by_desc(RecipeColumn::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes by owner: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Recipe::from)
            .collect::<Vec<Recipe>>();

        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Transaction};
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::entity::recipes;

    fn model(title: &str, minutes_ago: i64) -> recipes::Model {
        let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
            - Duration::minutes(minutes_ago);

        recipes::Model {
            id: Uuid::now_v7(),
            owner_id: "user-1".to_string(),
            title: title.to_string(),
            ingredients: json!(["eggs", "flour"]),
            instructions: "Mix.".to_string(),
            created_at: created_at.fixed_offset(),
        }
    }

    fn transaction_log(repository: PostgresRecipeRepository) -> Vec<Transaction> {
        Arc::try_unwrap(repository.db)
            .ok()
            .expect("repository should hold the only connection handle")
            .into_transaction_log()
    }

    #[tokio::test]
    async fn fetch_filters_by_owner_newest_first() {
        let newest = model("Newest", 1);
        let oldest = model("Oldest", 30);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![newest.clone(), oldest.clone()]])
            .into_connection();
        let repository = PostgresRecipeRepository::new(Arc::new(db));

        let recipes = repository
            .fetch_recipes_by_owner(UserIdentity::from("user-1"))
            .await
            .unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Newest");
        assert_eq!(recipes[0].ingredients, vec!["eggs", "flour"]);
        assert!(recipes[0].created_at > recipes[1].created_at);

        let log = transaction_log(repository);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.contains(r#"WHERE "recipes"."owner_id" = $1"#), "{sql}");
        assert!(
            sql.contains(r#"ORDER BY "recipes"."created_at" DESC, "recipes"."id" DESC"#),
            "{sql}"
        );
    }

    #[tokio::test]
    async fn create_persists_owner_and_content() {
        let recipe = Recipe::new(
            UserIdentity::from("user-1"),
            "Pancakes".to_string(),
            vec!["eggs".to_string(), "flour".to_string()],
            "Mix.".to_string(),
        );
        let stored = recipes::Model {
            id: recipe.id,
            owner_id: "user-1".to_string(),
            title: "Pancakes".to_string(),
            ingredients: json!(["eggs", "flour"]),
            instructions: "Mix.".to_string(),
            created_at: recipe.created_at.fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored]])
            .into_connection();
        let repository = PostgresRecipeRepository::new(Arc::new(db));

        let created = repository.create_recipe(recipe.clone()).await.unwrap();

        assert_eq!(created, recipe);

        let log = transaction_log(repository);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.starts_with(r#"INSERT INTO "recipes""#), "{sql}");
        assert!(sql.contains("RETURNING"), "{sql}");
    }

    #[tokio::test]
    async fn database_errors_become_internal_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repository = PostgresRecipeRepository::new(Arc::new(db));

        let result = repository
            .fetch_recipes_by_owner(UserIdentity::from("user-1"))
            .await;

        assert_eq!(result.unwrap_err(), CoreError::InternalServerError);
    }
}
