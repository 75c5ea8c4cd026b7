//! Slot inventory with a quick-select hotbar.

use sandlot_core::{Error, InventoryConfig, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::item::{Item, ItemStack};

/// Fixed-size slot inventory.
///
/// The first `hotbar_size` slots form the hotbar; `selected_slot` always
/// points into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<ItemStack>,
    selected_slot: usize,
    hotbar_size: usize,
}

impl Inventory {
    /// Create an empty inventory.
    ///
    /// `hotbar_size` is clamped to `1..=slot_count` so selection is always
    /// well-defined.
    #[must_use]
    pub fn new(slot_count: usize, hotbar_size: usize) -> Self {
        Self {
            slots: vec![ItemStack::empty(); slot_count],
            selected_slot: 0,
            hotbar_size: hotbar_size.clamp(1, slot_count.max(1)),
        }
    }

    /// Create an empty inventory from configuration
    #[must_use]
    pub fn from_config(config: &InventoryConfig) -> Self {
        Self::new(config.slots, config.hotbar)
    }

    /// Add as much of `item` as fits and return what did not.
    ///
    /// Existing stacks of the same id are topped up first, in slot order;
    /// the rest goes into empty slots, split at the item's max stack.
    /// Units placed before running out of room stay placed.
    pub fn insert(&mut self, mut item: Item) -> Option<Item> {
        for slot in &mut self.slots {
            if item.count == 0 {
                break;
            }
            if slot.holds(item.id()) {
                item.count -= slot.fill(item.count);
            }
        }

        for slot in &mut self.slots {
            if item.count == 0 {
                break;
            }
            if slot.is_empty() {
                let placed = item.count.min(item.kind.max_stack);
                *slot = ItemStack::new(item.kind.clone(), placed);
                item.count -= placed;
            }
        }

        if item.count == 0 {
            None
        } else {
            trace!(id = item.id(), remaining = item.count, "Inventory full");
            Some(item)
        }
    }

    /// Add `item`; returns `true` if every unit was placed.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.insert(item).is_none()
    }

    /// Remove up to `count` units of `id` in slot order.
    ///
    /// Returns `true` if the full amount was removed. Removal is not
    /// rolled back on failure: whatever was available is gone.
    pub fn remove_item(&mut self, id: &str, count: u32) -> bool {
        let mut removed = 0;
        for slot in &mut self.slots {
            if removed >= count {
                break;
            }
            if slot.holds(id) {
                removed += slot.take(count - removed);
            }
        }
        removed >= count
    }

    /// Total units of `id` across all slots
    #[must_use]
    pub fn item_count(&self, id: &str) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(id))
            .map(ItemStack::count)
            .sum()
    }

    /// Contents of the selected hotbar slot, if it holds anything
    #[must_use]
    pub fn selected_item(&self) -> Option<&ItemStack> {
        self.slots
            .get(self.selected_slot)
            .filter(|slot| !slot.is_empty())
    }

    /// Index of the selected hotbar slot
    #[inline]
    #[must_use]
    pub const fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Number of hotbar slots
    #[inline]
    #[must_use]
    pub const fn hotbar_size(&self) -> usize {
        self.hotbar_size
    }

    /// All slots in order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    /// Slot at `index`
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index)
    }

    /// First slot holding item `id`
    #[must_use]
    pub fn find(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.holds(id))
    }

    /// Select the next hotbar slot, wrapping to the first
    pub fn select_next(&mut self) {
        self.selected_slot = (self.selected_slot + 1) % self.hotbar_size;
    }

    /// Select the previous hotbar slot, wrapping to the last
    pub fn select_previous(&mut self) {
        self.selected_slot = self
            .selected_slot
            .checked_sub(1)
            .unwrap_or(self.hotbar_size - 1);
    }

    /// Select hotbar slot `index`; out-of-range indices are ignored
    pub fn select_slot(&mut self, index: usize) {
        if index < self.hotbar_size {
            self.selected_slot = index;
        }
    }

    /// Whether every slot holds a full stack
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(ItemStack::is_full)
    }

    /// Whether every slot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ItemStack::is_empty)
    }

    /// Exchange the contents of two slots
    pub fn swap_slots(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_index(a)?;
        self.check_index(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Overwrite a slot, returning its previous contents
    pub fn set_slot(&mut self, index: usize, stack: ItemStack) -> Result<ItemStack> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.slots[index], stack))
    }

    /// Empty every slot and reset the selection
    pub fn clear(&mut self) {
        self.slots.fill(ItemStack::empty());
        self.selected_slot = 0;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds(format!(
                "slot {index} (inventory has {} slots)",
                self.slots.len()
            )))
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::from_config(&InventoryConfig::default())
    }
}
