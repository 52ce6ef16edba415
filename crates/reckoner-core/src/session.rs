//! The session: target list plus cached results, owned by the host and
//! passed by reference -- there is no process-wide state.
//!
//! Every mutation (add, remove, adjust, clear) triggers a full
//! recalculation; the result map is always consistent with the target list
//! when control returns to the caller.

use crate::calculator::CostCalculator;
use crate::id::{ItemId, Quantity, TargetId};
use crate::resolver::{CachingResolver, RecipeSource};
use serde::{Serialize, Deserialize};
use slotmap::SlotMap;
use std::collections::HashMap;

/// One entry in the target list: an item the user wants, with the desired
/// quantity. Always holds a positive count while stored in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetEntry {
    pub item: ItemId,
    pub count: Quantity,
}

/// Aggregation root for one user session: the current targets, the memoizing
/// resolver, and the aggregated base-material results.
///
/// Entries are addressed by [`TargetId`] -- identity, not item value. Two
/// separately created entries for the same item are never merged by removal;
/// only [`add_target`] coalesces.
///
/// [`add_target`]: Session::add_target
pub struct Session<S> {
    targets: SlotMap<TargetId, TargetEntry>,
    order: Vec<TargetId>,
    resolver: CachingResolver<S>,
    calculator: CostCalculator,
}

impl<S: RecipeSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self {
            targets: SlotMap::with_key(),
            order: Vec::new(),
            resolver: CachingResolver::new(source),
            calculator: CostCalculator::new(),
        }
    }

    /// Add one unit of `item` to the targets: +1 on the existing entry for
    /// that item, or a new entry with count 1. First-insertion order is
    /// preserved; later increments do not reorder.
    pub fn add_target(&mut self, item: ItemId) -> TargetId {
        let existing = self
            .order
            .iter()
            .copied()
            .find(|&id| self.targets[id].item == item);
        let id = match existing {
            Some(id) => {
                self.targets[id].count += 1;
                id
            }
            None => {
                let id = self.targets.insert(TargetEntry { item, count: 1 });
                self.order.push(id);
                id
            }
        };
        self.recalculate();
        id
    }

    /// Remove the entry with this identity. Returns false if the id is stale.
    pub fn remove_target(&mut self, id: TargetId) -> bool {
        if self.targets.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&t| t != id);
        self.recalculate();
        true
    }

    /// Adjust an entry's count by `delta`. A count dropping to zero or below
    /// removes the entry. Returns false if the id is stale.
    pub fn adjust_quantity(&mut self, id: TargetId, delta: Quantity) -> bool {
        let Some(entry) = self.targets.get_mut(id) else {
            return false;
        };
        let next = entry.count + delta;
        if next <= 0 {
            return self.remove_target(id);
        }
        entry.count = next;
        self.recalculate();
        true
    }

    /// Drop every target.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
        self.order.clear();
        self.recalculate();
    }

    /// Targets in first-insertion order.
    pub fn targets(&self) -> impl Iterator<Item = (TargetId, &TargetEntry)> {
        self.order.iter().map(|&id| (id, &self.targets[id]))
    }

    pub fn get_target(&self, id: TargetId) -> Option<&TargetEntry> {
        self.targets.get(id)
    }

    pub fn target_count(&self) -> usize {
        self.order.len()
    }

    /// The aggregated base-material demand for the current targets. Display
    /// ordering is the presentation layer's concern; see [`crate::display`].
    pub fn results(&self) -> &HashMap<ItemId, Quantity> {
        self.calculator.results()
    }

    /// Invalidate memoized recipe lookups (e.g. when the underlying data
    /// source changed). Results are rebuilt on the next recalculation.
    pub fn clear_cache(&mut self) {
        self.resolver.clear_cache();
    }

    /// Rebuild the result map from the current targets, fully replacing the
    /// previous one. Runs to completion before returning; every mutation
    /// calls this automatically.
    pub fn recalculate(&mut self) {
        let targets = &self.targets;
        self.calculator.calculate(
            &mut self.resolver,
            self.order.iter().map(|&id| {
                let entry = &targets[id];
                (entry.item, entry.count)
            }),
        );
    }
}
