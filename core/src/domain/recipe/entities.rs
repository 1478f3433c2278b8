use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{authentication::value_objects::UserIdentity, common::generate_timestamp};

/// A recipe saved by its owner. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub owner: UserIdentity,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(
        owner: UserIdentity,
        title: String,
        ingredients: Vec<String>,
        instructions: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            owner,
            title,
            ingredients,
            instructions,
            created_at: now,
        }
    }
}

/// A generated recipe that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}
