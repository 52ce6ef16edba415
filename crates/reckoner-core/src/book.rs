//! The hand-authored recipe table: a builder that interns item names and
//! registers recipes, frozen into an immutable [`RecipeBook`].

use crate::id::ItemId;
use crate::recipe::Recipe;
use crate::resolver::RecipeSource;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Builder for constructing an immutable RecipeBook.
/// Two-phase lifecycle: registration -> finalization.
#[derive(Debug, Default)]
pub struct RecipeBookBuilder {
    items: Vec<String>,
    item_name_to_id: HashMap<String, ItemId>,
    recipes: Vec<Recipe>,
    recipe_index: HashMap<ItemId, usize>,
}

impl RecipeBookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase 1: Register an item by name. Returns its ID; registering a name
    /// that already exists returns the existing ID.
    pub fn register_item(&mut self, name: &str) -> ItemId {
        if let Some(&id) = self.item_name_to_id.get(name) {
            return id;
        }
        let id = ItemId(self.items.len() as u32);
        self.items.push(name.to_string());
        self.item_name_to_id.insert(name.to_string(), id);
        id
    }

    /// Phase 1: Register a recipe. The first recipe registered for a result
    /// item is canonical; later registrations for the same result are ignored.
    /// Returns whether the recipe became canonical.
    pub fn register_recipe(&mut self, recipe: Recipe) -> bool {
        match self.recipe_index.entry(recipe.result) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(self.recipes.len());
                self.recipes.push(recipe);
                true
            }
        }
    }

    /// Lookup item ID by name.
    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.item_name_to_id.get(name).copied()
    }

    /// Phase 2: Finalize and build the immutable book.
    pub fn build(self) -> Result<RecipeBook, BookError> {
        // Validate: every item a recipe references must be registered.
        for recipe in &self.recipes {
            if recipe.result.0 as usize >= self.items.len() {
                return Err(BookError::InvalidItemRef(recipe.result));
            }
            for ingredient in &recipe.ingredients {
                if ingredient.item.0 as usize >= self.items.len() {
                    return Err(BookError::InvalidItemRef(ingredient.item));
                }
            }
        }

        // Normalize recipes registered as raw literals: batch sizes below 1
        // floor to 1, zero-quantity ingredients are dropped.
        let recipes = self
            .recipes
            .into_iter()
            .map(|mut recipe| {
                recipe.result_count = recipe.result_count.max(1);
                recipe.ingredients.retain(|i| i.quantity > 0);
                recipe
            })
            .collect();

        Ok(RecipeBook {
            items: self.items,
            item_name_to_id: self.item_name_to_id,
            recipes,
            recipe_index: self.recipe_index,
        })
    }
}

/// Immutable recipe table. Frozen after build(); one canonical recipe per
/// result item.
#[derive(Debug)]
pub struct RecipeBook {
    items: Vec<String>,
    item_name_to_id: HashMap<String, ItemId>,
    recipes: Vec<Recipe>,
    recipe_index: HashMap<ItemId, usize>,
}

impl RecipeBook {
    /// The canonical recipe producing `item`, if the book holds one.
    pub fn recipe_for(&self, item: ItemId) -> Option<&Recipe> {
        self.recipe_index.get(&item).map(|&i| &self.recipes[i])
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.item_name_to_id.get(name).copied()
    }

    pub fn item_name(&self, id: ItemId) -> Option<&str> {
        self.items.get(id.0 as usize).map(String::as_str)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

impl RecipeSource for RecipeBook {
    fn find_recipe(&self, item: ItemId) -> Option<Recipe> {
        self.recipe_for(item).cloned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("recipe references unregistered item: {0:?}")]
    InvalidItemRef(ItemId),
}
