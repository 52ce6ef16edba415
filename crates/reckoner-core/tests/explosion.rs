//! End-to-end explosion tests: reference scenarios driven through a full
//! session, plus cache observability via a probe-counting source.

use reckoner_core::calculator::{CostCalculator, MAX_DEPTH};
use reckoner_core::id::{ItemId, Quantity};
use reckoner_core::recipe::{Ingredient, Recipe};
use reckoner_core::resolver::{CachingResolver, EmptySource, FnSource, RecipeSource};
use reckoner_core::session::Session;
use reckoner_core::test_utils::*;
use std::cell::RefCell;

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn scenario_one_table() {
    // 1 table (1 per 4 planks); planks 4 per 1 log.
    // crafts(table) = ceil(1/1) = 1 -> 4 planks
    // crafts(plank) = ceil(4/4) = 1 -> 1 log
    let mut session = Session::new(woodworking_book());
    session.add_target(table());
    assert_eq!(session.results()[&oak_log()], 1);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn scenario_five_sticks() {
    // 5 sticks (4 per 2 planks); planks 4 per 1 log.
    // crafts(stick) = ceil(5/4) = 2 -> 4 planks
    // crafts(plank) = ceil(4/4) = 1 -> 1 log
    let mut session = Session::new(woodworking_book());
    let id = session.add_target(stick());
    session.adjust_quantity(id, 4);
    assert_eq!(session.results()[&oak_log()], 1);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn cross_target_aggregation() {
    // Tables and sticks both bottom out on oak logs; one combined total.
    let mut session = Session::new(woodworking_book());
    let tables = session.add_target(table());
    session.adjust_quantity(tables, 3); // 4 tables -> 16 planks -> 4 logs
    let sticks = session.add_target(stick());
    session.adjust_quantity(sticks, 7); // 8 sticks -> 4 planks -> 1 log
    assert_eq!(session.results()[&oak_log()], 5);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn full_batch_consumed_for_any_positive_demand() {
    // One plank still costs one whole log craft.
    let mut session = Session::new(woodworking_book());
    session.add_target(plank());
    assert_eq!(session.results()[&oak_log()], 1);
}

// ===========================================================================
// Cycle and depth behavior
// ===========================================================================

#[test]
fn cyclic_recipe_terminates_with_finite_demand() {
    let mut session = Session::new(cyclic_book());
    session.add_target(widget());

    // One expansion per depth 0..=MAX_DEPTH, each consuming 2 rivets, then
    // the over-depth visit counts the widget itself as a base line.
    let levels = Quantity::from(MAX_DEPTH) + 1;
    assert_eq!(session.results()[&rivet()], 2 * levels);
    assert_eq!(session.results()[&widget()], 1);
    assert_eq!(session.results().len(), 2);
}

#[test]
fn pure_self_loop_yields_itself() {
    let mut builder = reckoner_core::book::RecipeBookBuilder::new();
    let ouroboros = builder.register_item("ouroboros");
    builder.register_recipe(Recipe::new(ouroboros, 1, vec![Ingredient::new(ouroboros, 1)]));
    let mut session = Session::new(builder.build().unwrap());

    session.add_target(ouroboros);
    assert_eq!(session.results()[&ouroboros], 1);
    assert_eq!(session.results().len(), 1);
}

#[test]
fn branches_revisiting_an_item_each_get_full_depth() {
    // Both table and stick expand through plank; the per-item depth map is
    // restored after each branch, so the second branch is not cut short.
    let mut session = Session::new(woodworking_book());
    session.add_target(table());
    session.add_target(stick());
    assert_eq!(session.results()[&oak_log()], 2);
}

// ===========================================================================
// Resolver caching observed through a counting source
// ===========================================================================

fn counting_source(probes: &RefCell<Vec<ItemId>>) -> impl RecipeSource + '_ {
    let book = woodworking_book();
    FnSource::new(move |item| {
        probes.borrow_mut().push(item);
        book.find_recipe(item)
    })
}

#[test]
fn each_item_is_probed_once_per_cache_generation() {
    let probes = RefCell::new(Vec::new());
    let mut session = Session::new(counting_source(&probes));

    session.add_target(table());
    session.add_target(table());
    session.add_target(stick());

    // table, plank, oak_log, stick: one probe each despite three
    // recalculations walking the same chain.
    let mut seen = probes.borrow().clone();
    seen.sort();
    seen.dedup();
    assert_eq!(probes.borrow().len(), seen.len());
}

#[test]
fn clear_cache_reprobes_on_next_recalculation() {
    let probes = RefCell::new(Vec::new());
    let mut session = Session::new(counting_source(&probes));

    session.add_target(table());
    let first_generation = probes.borrow().len();

    session.clear_cache();
    session.recalculate();
    assert_eq!(probes.borrow().len(), first_generation * 2);
}

#[test]
fn results_unchanged_across_cache_generations() {
    let mut session = Session::new(woodworking_book());
    session.add_target(table());
    let before = session.results().clone();
    session.clear_cache();
    session.recalculate();
    assert_eq!(&before, session.results());
}

// ===========================================================================
// Degenerate backend
// ===========================================================================

#[test]
fn empty_source_treats_every_target_as_base() {
    let mut session = Session::new(EmptySource);
    let a = session.add_target(ItemId(1));
    session.adjust_quantity(a, 63);
    session.add_target(ItemId(2));

    assert_eq!(session.results()[&ItemId(1)], 64);
    assert_eq!(session.results()[&ItemId(2)], 1);
}

// ===========================================================================
// Direct calculator use
// ===========================================================================

#[test]
fn calculator_matches_manual_expansion() {
    // 3 tables and 10 sticks, worked by hand:
    //   tables: ceil(3/1)=3 crafts -> 12 planks
    //   sticks: ceil(10/4)=3 crafts -> 6 planks
    //   planks: ceil(12/4)=3 and ceil(6/4)=2 crafts -> 3 + 2 logs
    let mut resolver = CachingResolver::new(woodworking_book());
    let mut calc = CostCalculator::new();
    calc.calculate(&mut resolver, vec![(table(), 3), (stick(), 10)]);
    assert_eq!(calc.results()[&oak_log()], 5);
}

#[test]
fn target_order_does_not_change_totals() {
    let mut resolver = CachingResolver::new(woodworking_book());
    let mut calc = CostCalculator::new();
    calc.calculate(&mut resolver, vec![(table(), 3), (stick(), 10)]);
    let forward = calc.results().clone();
    calc.calculate(&mut resolver, vec![(stick(), 10), (table(), 3)]);
    assert_eq!(&forward, calc.results());
}
