//! Shared test fixtures for unit tests, integration tests, and benchmarks
//! (via the `test-utils` feature).
//!
//! Item IDs are book-local: the constructors below match the registration
//! order of the book they belong to.

use crate::book::{RecipeBook, RecipeBookBuilder};
use crate::id::ItemId;
use crate::recipe::{Ingredient, Recipe};

// ===========================================================================
// Woodworking book items
// ===========================================================================

pub fn oak_log() -> ItemId {
    ItemId(0)
}
pub fn plank() -> ItemId {
    ItemId(1)
}
pub fn stick() -> ItemId {
    ItemId(2)
}
pub fn table() -> ItemId {
    ItemId(3)
}

/// The woodworking chain:
/// - 4 planks per 1 oak log
/// - 4 sticks per 2 planks
/// - 1 table per 4 planks
///
/// Oak logs are the only base material.
pub fn woodworking_book() -> RecipeBook {
    let mut b = RecipeBookBuilder::new();
    let oak_log = b.register_item("oak_log");
    let plank = b.register_item("plank");
    let stick = b.register_item("stick");
    let table = b.register_item("table");

    b.register_recipe(Recipe::new(plank, 4, vec![Ingredient::new(oak_log, 1)]));
    b.register_recipe(Recipe::new(stick, 4, vec![Ingredient::new(plank, 2)]));
    b.register_recipe(Recipe::new(table, 1, vec![Ingredient::new(plank, 4)]));
    b.build().expect("woodworking book is valid")
}

// ===========================================================================
// Cyclic book items
// ===========================================================================

pub fn widget() -> ItemId {
    ItemId(0)
}
pub fn rivet() -> ItemId {
    ItemId(1)
}

/// A self-requiring recipe: 1 widget per 1 widget + 2 rivets. Expansion only
/// terminates through the depth cutoff.
pub fn cyclic_book() -> RecipeBook {
    let mut b = RecipeBookBuilder::new();
    let widget = b.register_item("widget");
    let rivet = b.register_item("rivet");
    b.register_recipe(Recipe::new(
        widget,
        1,
        vec![Ingredient::new(widget, 1), Ingredient::new(rivet, 2)],
    ));
    b.build().expect("cyclic book is valid")
}

// ===========================================================================
// Linear refinement chains
// ===========================================================================

/// A chain of `len` distinct refinement steps over one raw input:
/// `refined_0` is 1 per 1 `raw`, `refined_i` is 1 per 1 `refined_{i-1}`.
pub fn chain_book(len: usize) -> RecipeBook {
    let mut b = RecipeBookBuilder::new();
    let mut prev = b.register_item("raw");
    for i in 0..len {
        let refined = b.register_item(&format!("refined_{i}"));
        b.register_recipe(Recipe::new(refined, 1, vec![Ingredient::new(prev, 1)]));
        prev = refined;
    }
    b.build().expect("chain book is valid")
}
