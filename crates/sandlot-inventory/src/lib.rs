//! Items and the slot-based inventory.
//!
//! Slots hold independent value copies of their item type; stacking and
//! splitting move counts, never references, so mutating one slot can never
//! affect another.

mod inventory;
mod item;

pub use inventory::Inventory;
pub use item::{Item, ItemKind, ItemStack};
