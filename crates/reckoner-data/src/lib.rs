//! Data-driven recipe book loading for Reckoner.
//!
//! The core owns no file format; this crate maps RON/TOML/JSON recipe packs
//! onto [`reckoner_core::book::RecipeBook`], resolving item references by
//! name.

pub mod loader;
pub mod schema;

pub use loader::{DataError, Format, book_from_json, book_from_path, book_from_ron, book_from_toml};
