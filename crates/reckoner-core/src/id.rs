use serde::{Serialize, Deserialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies one entry in a session's target list. Removal and quantity
    /// adjustment address entries by this key, never by item value.
    pub struct TargetId;
}

/// Identifies an item. Cheap to copy and compare; stable for the process
/// lifetime. The `Ord` impl gives display code a deterministic tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// An item demand or aggregated material total. Signed 64-bit so deep
/// explosions multiply without overflow; all defined inputs are non-negative.
pub type Quantity = i64;
