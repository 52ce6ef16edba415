//! Recursive explosion of targets into aggregated base-material demand.
//!
//! Each target is expanded depth-first through its recipe closure. An item
//! with no recipe -- or whose expansion lineage exceeds [`MAX_DEPTH`] --
//! is a base material and is counted directly. Crafts are whole batches:
//! `ceil(count / batch)`, so a partial batch still consumes a full batch's
//! ingredients.

use crate::id::{ItemId, Quantity};
use crate::resolver::{CachingResolver, RecipeSource};
use std::collections::HashMap;

/// Per-item recursion cutoff. An item seen deeper than this in its own
/// expansion lineage stops expanding and counts as a base material, which
/// bounds recursion even on cyclic recipe graphs.
pub const MAX_DEPTH: u32 = 10;

/// Explodes a list of (item, count) targets into a base-material total map.
///
/// The result map is fully rebuilt by every [`calculate`] call, never
/// patched incrementally. Independent recursion paths bottoming out on the
/// same item sum their demand; merge order does not affect the final map.
///
/// [`calculate`]: CostCalculator::calculate
#[derive(Debug, Default)]
pub struct CostCalculator {
    totals: HashMap<ItemId, Quantity>,
}

impl CostCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the result map with the combined explosion of `targets`,
    /// processed depth-first in the given order.
    pub fn calculate<S, I>(&mut self, resolver: &mut CachingResolver<S>, targets: I)
    where
        S: RecipeSource,
        I: IntoIterator<Item = (ItemId, Quantity)>,
    {
        self.totals.clear();
        // Depth is tracked per item for this calculation only, so an item's
        // own lineage is bounded even when independent branches revisit it.
        let mut depth_by_item: HashMap<ItemId, u32> = HashMap::new();
        for (item, count) in targets {
            self.process_item(resolver, &mut depth_by_item, item, count);
        }
    }

    fn process_item<S: RecipeSource>(
        &mut self,
        resolver: &mut CachingResolver<S>,
        depth_by_item: &mut HashMap<ItemId, u32>,
        item: ItemId,
        count: Quantity,
    ) {
        let depth = depth_by_item.get(&item).copied().unwrap_or(0);
        if depth > MAX_DEPTH {
            self.add_material(item, count);
            return;
        }

        let Some(recipe) = resolver.lookup(item) else {
            // No recipe: base material.
            self.add_material(item, count);
            return;
        };

        let batch = Quantity::from(recipe.result_count.max(1));
        let crafts_needed = div_ceil(count, batch);

        depth_by_item.insert(item, depth + 1);
        for ingredient in &recipe.ingredients {
            self.process_item(
                resolver,
                depth_by_item,
                ingredient.item,
                crafts_needed * Quantity::from(ingredient.quantity),
            );
        }
        depth_by_item.insert(item, depth);
    }

    fn add_material(&mut self, item: ItemId, count: Quantity) {
        *self.totals.entry(item).or_insert(0) += count;
    }

    /// The aggregated base-material demand from the last `calculate` call.
    pub fn results(&self) -> &HashMap<ItemId, Quantity> {
        &self.totals
    }
}

/// Ceiling division for non-negative demand over a positive batch size.
fn div_ceil(count: Quantity, batch: Quantity) -> Quantity {
    (count + batch - 1) / batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::EmptySource;
    use crate::test_utils::*;

    #[test]
    fn ceiling_division_never_rounds_down() {
        assert_eq!(div_ceil(1, 4), 1);
        assert_eq!(div_ceil(4, 4), 1);
        assert_eq!(div_ceil(5, 4), 2);
        assert_eq!(div_ceil(0, 4), 0);
    }

    #[test]
    fn unknown_items_count_directly() {
        let mut resolver = CachingResolver::new(EmptySource);
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(ItemId(7), 12)]);
        assert_eq!(calc.results()[&ItemId(7)], 12);
        assert_eq!(calc.results().len(), 1);
    }

    #[test]
    fn single_step_chain_expands_to_base() {
        // 1 table needs 4 planks; planks come 4 per 1 log.
        let mut resolver = CachingResolver::new(woodworking_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(table(), 1)]);
        assert_eq!(calc.results()[&oak_log()], 1);
        assert_eq!(calc.results().len(), 1);
    }

    #[test]
    fn partial_batch_consumes_full_batch() {
        // 5 sticks at 4 per craft -> 2 crafts -> 4 planks -> 1 log.
        let mut resolver = CachingResolver::new(woodworking_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(stick(), 5)]);
        assert_eq!(calc.results()[&oak_log()], 1);
        assert_eq!(calc.results().len(), 1);
    }

    #[test]
    fn result_map_is_rebuilt_per_call() {
        let mut resolver = CachingResolver::new(woodworking_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(table(), 1)]);
        calc.calculate(&mut resolver, vec![(stick(), 5)]);
        // Only the second calculation's demand remains.
        assert_eq!(calc.results()[&oak_log()], 1);
        assert_eq!(calc.results().len(), 1);
    }

    #[test]
    fn independent_paths_sum_demand() {
        let mut resolver = CachingResolver::new(woodworking_book());
        let mut calc = CostCalculator::new();
        // 16 planks -> 4 logs; 8 sticks -> 2 crafts -> 4 planks -> 1 log.
        calc.calculate(&mut resolver, vec![(plank(), 16), (stick(), 8)]);
        assert_eq!(calc.results()[&oak_log()], 5);
    }

    #[test]
    fn self_cycle_halts_at_depth_cutoff() {
        // widget needs 1 widget + 2 rivets per craft. Expansion runs at
        // depths 0..=MAX_DEPTH, then the next visit counts widget directly.
        let mut resolver = CachingResolver::new(cyclic_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(widget(), 1)]);

        let levels = Quantity::from(MAX_DEPTH) + 1;
        assert_eq!(calc.results()[&rivet()], 2 * levels);
        assert_eq!(calc.results()[&widget()], 1);
    }

    #[test]
    fn cycle_result_is_deterministic() {
        let mut resolver = CachingResolver::new(cyclic_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(widget(), 1)]);
        let first = calc.results().clone();
        calc.calculate(&mut resolver, vec![(widget(), 1)]);
        assert_eq!(&first, calc.results());
    }

    #[test]
    fn long_chain_of_distinct_items_fully_expands() {
        // Depth is tracked per item, not globally: a chain of 30 distinct
        // refinement steps expands well past MAX_DEPTH levels of recursion.
        let book = chain_book(30);
        let top = book.item_id("refined_29").unwrap();
        let raw = book.item_id("raw").unwrap();
        let mut resolver = CachingResolver::new(book);
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, vec![(top, 1)]);
        assert_eq!(calc.results()[&raw], 1);
        assert_eq!(calc.results().len(), 1);
    }

    #[test]
    fn empty_target_list_yields_empty_map() {
        let mut resolver = CachingResolver::new(woodworking_book());
        let mut calc = CostCalculator::new();
        calc.calculate(&mut resolver, Vec::new());
        assert!(calc.results().is_empty());
    }
}
