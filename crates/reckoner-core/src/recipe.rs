use crate::id::ItemId;
use serde::{Serialize, Deserialize};

/// One ingredient consumed per crafted batch. The quantity is per
/// `result_count`-sized output batch, not per output unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: ItemId,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(item: ItemId, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// A crafting recipe: a fixed-size output batch plus the ingredients one
/// batch consumes, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub result: ItemId,
    /// Output units per craft. Always >= 1 when constructed via [`Recipe::new`].
    pub result_count: u32,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Build a recipe, normalizing degenerate source data: a batch size
    /// below 1 floors to 1 and zero-quantity ingredients are dropped.
    pub fn new(result: ItemId, result_count: u32, ingredients: Vec<Ingredient>) -> Self {
        let mut ingredients = ingredients;
        ingredients.retain(|i| i.quantity > 0);
        Self {
            result,
            result_count: result_count.max(1),
            ingredients,
        }
    }
}
