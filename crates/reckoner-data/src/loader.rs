//! Loading pipeline: parse a recipe pack (RON/TOML/JSON), resolve name
//! references, build the immutable book.

use crate::schema::BookData;
use reckoner_core::book::{BookError, RecipeBook, RecipeBookBuilder};
use reckoner_core::recipe::{Ingredient, Recipe};
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a recipe pack.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// A recipe references an item name the pack never declares.
    #[error("unknown item reference '{0}'")]
    UnknownItemRef(String),

    #[error("book error: {0}")]
    Book(#[from] BookError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported recipe pack formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// Entry points
// ===========================================================================

pub fn book_from_json(input: &str) -> Result<RecipeBook, DataError> {
    build_book(serde_json::from_str(input)?)
}

pub fn book_from_ron(input: &str) -> Result<RecipeBook, DataError> {
    build_book(ron::from_str(input)?)
}

pub fn book_from_toml(input: &str) -> Result<RecipeBook, DataError> {
    build_book(toml::from_str(input)?)
}

/// Load a recipe pack from disk, picking the parser by file extension.
pub fn book_from_path(path: &Path) -> Result<RecipeBook, DataError> {
    let format = detect_format(path)?;
    let raw = std::fs::read_to_string(path)?;
    match format {
        Format::Ron => book_from_ron(&raw),
        Format::Toml => book_from_toml(&raw),
        Format::Json => book_from_json(&raw),
    }
}

// ===========================================================================
// Reference resolution
// ===========================================================================

/// Resolve name references and build the book. Duplicate recipes for one
/// result item are ignored with a warning; the first declaration wins.
pub fn build_book(data: BookData) -> Result<RecipeBook, DataError> {
    let mut builder = RecipeBookBuilder::new();

    for item in &data.items {
        builder.register_item(&item.name);
    }

    for recipe in &data.recipes {
        let result = builder
            .item_id(&recipe.result)
            .ok_or_else(|| DataError::UnknownItemRef(recipe.result.clone()))?;
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ing| {
                builder
                    .item_id(&ing.item)
                    .map(|item| Ingredient::new(item, ing.quantity))
                    .ok_or_else(|| DataError::UnknownItemRef(ing.item.clone()))
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        let result_count = recipe.result_count.clamp(1, i64::from(u32::MAX)) as u32;
        if !builder.register_recipe(Recipe::new(result, result_count, ingredients)) {
            log::warn!(
                "ignoring duplicate recipe for '{}': first declaration wins",
                recipe.result
            );
        }
    }

    Ok(builder.build()?)
}
