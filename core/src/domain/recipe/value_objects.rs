#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRecipeInput {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRecipeInput {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<crate::domain::recipe::entities::GeneratedDraft> for SaveRecipeInput {
    fn from(draft: crate::domain::recipe::entities::GeneratedDraft) -> Self {
        Self {
            title: draft.title,
            ingredients: draft.ingredients,
            instructions: draft.instructions,
        }
    }
}

/// Splits the free-text ingredient field on commas and trims each entry.
///
/// Empty entries are kept, so `"eggs,,milk"` yields three items.
pub fn parse_ingredient_list(text: &str) -> Vec<String> {
    text.split(',').map(|i| i.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingredients_are_split_and_trimmed() {
        assert_eq!(
            parse_ingredient_list(" eggs, flour ,milk"),
            vec!["eggs", "flour", "milk"]
        );
    }

    #[test]
    fn empty_entries_are_preserved() {
        assert_eq!(parse_ingredient_list("eggs,,milk"), vec!["eggs", "", "milk"]);
        assert_eq!(parse_ingredient_list(""), vec![""]);
    }
}
