//! Recipe lookup behind a swappable backend, memoized by [`CachingResolver`].
//!
//! The calculator depends only on the resolver, never on which backend is
//! active. Absence of a recipe is not an error -- it is the defined
//! base-material signal.

use crate::id::ItemId;
use crate::recipe::Recipe;
use std::collections::HashMap;
use std::rc::Rc;

/// One lookup capability: map an item to the canonical recipe producing it.
///
/// `None` means the item is a base material as far as this source knows.
pub trait RecipeSource {
    fn find_recipe(&self, item: ItemId) -> Option<Recipe>;
}

impl<S: RecipeSource + ?Sized> RecipeSource for Box<S> {
    fn find_recipe(&self, item: ItemId) -> Option<Recipe> {
        (**self).find_recipe(item)
    }
}

impl<S: RecipeSource + ?Sized> RecipeSource for Rc<S> {
    fn find_recipe(&self, item: ItemId) -> Option<Recipe> {
        (**self).find_recipe(item)
    }
}

/// Source that knows no recipes: every item resolves as a base material.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySource;

impl RecipeSource for EmptySource {
    fn find_recipe(&self, _item: ItemId) -> Option<Recipe> {
        None
    }
}

/// Adapts a host-owned live index via closure.
///
/// An unavailable index reports `None`, which is indistinguishable from a
/// confirmed base material. Hosts that need to tell the two apart must
/// invalidate the resolver cache once the index comes back.
pub struct FnSource<F>(F);

impl<F> FnSource<F>
where
    F: Fn(ItemId) -> Option<Recipe>,
{
    pub fn new(lookup: F) -> Self {
        Self(lookup)
    }
}

impl<F> RecipeSource for FnSource<F>
where
    F: Fn(ItemId) -> Option<Recipe>,
{
    fn find_recipe(&self, item: ItemId) -> Option<Recipe> {
        (self.0)(item)
    }
}

/// Memoizing front over a [`RecipeSource`].
///
/// Both outcomes are cached -- a confirmed "no recipe" is remembered so the
/// backing source is never re-probed for that item until [`clear_cache`]
/// (e.g. when the underlying data source changes).
///
/// [`clear_cache`]: CachingResolver::clear_cache
pub struct CachingResolver<S> {
    source: S,
    cache: HashMap<ItemId, Option<Rc<Recipe>>>,
}

impl<S: RecipeSource> CachingResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Memoized recipe lookup. Safe under repeated calls; at most one probe
    /// of the backing source per item per cache generation.
    pub fn lookup(&mut self, item: ItemId) -> Option<Rc<Recipe>> {
        if let Some(cached) = self.cache.get(&item) {
            return cached.clone();
        }

        let resolved = self.source.find_recipe(item).map(Rc::new);
        match &resolved {
            Some(recipe) => log::debug!(
                "resolved recipe for {item:?}: {} ingredients, batch of {}",
                recipe.ingredients.len(),
                recipe.result_count
            ),
            None => log::debug!("no recipe for {item:?}: base material"),
        }
        self.cache.insert(item, resolved.clone());
        resolved
    }

    /// Invalidate every memoized lookup. The next `lookup` per item probes
    /// the backing source again.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Number of memoized outcomes (positive and negative).
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
