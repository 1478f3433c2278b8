use larder_core::domain::recipe::value_objects::parse_ingredient_list;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Ingredients either as a list or as the raw comma-separated text field.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_ingredient_source"))]
pub struct GenerateRecipeValidator {
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,

    #[serde(default)]
    #[schema(example = "eggs, flour, milk")]
    pub ingredients_text: Option<String>,
}

fn validate_ingredient_source(
    payload: &GenerateRecipeValidator,
) -> Result<(), ValidationError> {
    match (&payload.ingredients, &payload.ingredients_text) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(ValidationError::new("ingredient_source").with_message(
            "provide exactly one of ingredients or ingredients_text".into(),
        )),
    }
}

impl GenerateRecipeValidator {
    pub fn into_ingredients(self) -> Vec<String> {
        match (self.ingredients, self.ingredients_text) {
            (Some(ingredients), _) => ingredients,
            (None, Some(text)) => parse_ingredient_list(&text),
            (None, None) => Vec::new(),
        }
    }
}

/// Fields are stored exactly as sent.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRecipeValidator {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredient_text_is_split_on_commas() {
        let payload = GenerateRecipeValidator {
            ingredients: None,
            ingredients_text: Some("eggs, flour,milk ".to_string()),
        };

        assert!(payload.validate().is_ok());
        assert_eq!(payload.into_ingredients(), vec!["eggs", "flour", "milk"]);
    }

    #[test]
    fn ingredient_list_is_used_verbatim() {
        let payload = GenerateRecipeValidator {
            ingredients: Some(vec![" rice ".to_string()]),
            ingredients_text: None,
        };

        assert_eq!(payload.into_ingredients(), vec![" rice "]);
    }

    #[test]
    fn exactly_one_source_is_required() {
        let neither = GenerateRecipeValidator {
            ingredients: None,
            ingredients_text: None,
        };
        let both = GenerateRecipeValidator {
            ingredients: Some(vec!["rice".to_string()]),
            ingredients_text: Some("rice".to_string()),
        };

        assert!(neither.validate().is_err());
        assert!(both.validate().is_err());
    }
}
