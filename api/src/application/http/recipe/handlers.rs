pub mod generate_recipe;
pub mod list_recipes;
pub mod save_recipe;
