//! Serde schema for recipe pack files. All cross-references are by item
//! name; the loader resolves them against the declared item list.

use serde::Deserialize;

/// Top-level recipe pack structure.
#[derive(Debug, Deserialize)]
pub struct BookData {
    #[serde(default)]
    pub items: Vec<ItemData>,
    #[serde(default)]
    pub recipes: Vec<RecipeData>,
}

/// A declared item.
#[derive(Debug, Deserialize)]
pub struct ItemData {
    pub name: String,
}

/// A recipe entry. `result_count` defaults to 1; non-positive values in
/// source data are floored to 1 when the book is built.
#[derive(Debug, Deserialize)]
pub struct RecipeData {
    pub result: String,
    #[serde(default = "default_result_count")]
    pub result_count: i64,
    #[serde(default)]
    pub ingredients: Vec<IngredientData>,
}

fn default_result_count() -> i64 {
    1
}

/// One ingredient consumed per output batch.
#[derive(Debug, Deserialize)]
pub struct IngredientData {
    pub item: String,
    pub quantity: u32,
}
