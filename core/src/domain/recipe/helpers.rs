use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, recipe::entities::GeneratedDraft,
};

/// Builds the single user message sent to the completion service.
pub fn build_recipe_prompt(ingredients: &[String]) -> String {
    format!(
        "Create a simple recipe using these ingredients: {}. Format as JSON with fields: title, ingredients (array), instructions (string).",
        ingredients.join(", ")
    )
}

/// Parses the raw completion text strictly as a recipe draft.
///
/// The text must be a JSON object carrying a string `title`, an array of
/// strings `ingredients` and a string `instructions`. Anything else is
/// rejected; fenced or otherwise decorated output is not repaired.
pub fn parse_generated_draft(raw: &str) -> Result<GeneratedDraft, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyCompletion);
    }

    let parsed: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        error!("Failed to parse completion as JSON: {}", e);
        CoreError::InvalidCompletion(format!("response is not valid JSON: {}", e))
    })?;

    if !parsed.is_object() {
        return Err(CoreError::InvalidCompletion(
            "response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(parsed).map_err(|e| {
        error!("Invalid recipe format: {}", e);
        CoreError::InvalidCompletion(format!("invalid recipe format: {}", e))
    })
}
