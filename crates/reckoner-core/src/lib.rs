//! Reckoner Core -- a base-material reckoning engine for crafting games.
//!
//! Given a list of targets (item + desired quantity) and a recipe source,
//! this crate computes the total demand for irreducible base materials:
//! the recursive explosion of each target through its recipe closure, with
//! whole-batch (ceiling-division) accounting and a per-item depth cutoff
//! that bounds cyclic recipe graphs.
//!
//! # Data Flow
//!
//! ```text
//! host UI -> Session::add_target/remove_target/adjust_quantity
//!         -> CostCalculator::calculate (per mutation, full rebuild)
//!         -> CachingResolver::lookup (memoized, backed by a RecipeSource)
//!         -> Session::results -> host overlay
//! ```
//!
//! # Key Types
//!
//! - [`session::Session`] -- aggregation root: targets, resolver, results.
//!   Explicitly constructed and owned by the host; no global state.
//! - [`calculator::CostCalculator`] -- depth-first explosion of targets
//!   into an aggregated base-material map.
//! - [`resolver::RecipeSource`] -- the one lookup capability, with
//!   interchangeable backends: a static [`book::RecipeBook`], a host-index
//!   [`resolver::FnSource`], or the degenerate [`resolver::EmptySource`].
//! - [`resolver::CachingResolver`] -- memoizes positive and negative
//!   lookups; an item is never re-probed until the cache is cleared.
//! - [`book::RecipeBookBuilder`] -- registration -> validation -> frozen
//!   [`book::RecipeBook`] (one canonical recipe per result item).
//! - [`display`] -- ranking, capping, and count formatting for overlays.
//!
//! Everything is single-threaded and synchronous: recalculation blocks and
//! runs to completion, and the depth cutoff makes worst-case latency
//! deterministic for a finite recipe set. A multi-threaded host must wrap
//! each logical operation in exclusive access.

pub mod book;
pub mod calculator;
pub mod display;
pub mod id;
pub mod recipe;
pub mod resolver;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
