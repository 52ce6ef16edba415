//! Helpers the presentation layer uses to render results. The core never
//! reads [`OverlayConfig`] and performs no I/O here; persistence belongs to
//! the host's config layer.

use crate::id::{ItemId, Quantity};
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// Overlay settings consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Whether results are shown at all.
    pub enabled: bool,
    /// Cap on the number of result lines drawn.
    pub max_lines: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_lines: 10,
        }
    }
}

/// A single result line prepared for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLine {
    pub item: ItemId,
    pub quantity: Quantity,
}

/// Order results descending by quantity (item id breaks ties) and cap the
/// line count. Sorting lives here: the result map itself guarantees no
/// ordering.
pub fn ranked_results(results: &HashMap<ItemId, Quantity>, max_lines: usize) -> Vec<ResultLine> {
    let mut lines: Vec<ResultLine> = results
        .iter()
        .map(|(&item, &quantity)| ResultLine { item, quantity })
        .collect();
    lines.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.item.cmp(&b.item)));
    lines.truncate(max_lines);
    lines
}

/// Sum of all base-material lines, for a footer total.
pub fn total_quantity(results: &HashMap<ItemId, Quantity>) -> Quantity {
    results.values().sum()
}

/// Shorthand for large counts: 1500 -> "1.5K", 2_300_000 -> "2.3M".
pub fn format_quantity(quantity: Quantity) -> String {
    if quantity >= 1_000_000 {
        format!("{:.1}M", quantity as f64 / 1_000_000.0)
    } else if quantity >= 1_000 {
        format!("{:.1}K", quantity as f64 / 1_000.0)
    } else {
        quantity.to_string()
    }
}
