//! Item types and slot contents.

use sandlot_core::constants::DEFAULT_MAX_STACK;
use sandlot_core::{BlockKind, Color};
use serde::{Deserialize, Serialize};

/// Type of an item: what it is and how many fit in one slot.
///
/// Two items stack iff their `id`s match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKind {
    /// Stacking identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Maximum count per slot
    pub max_stack: u32,
    /// Render color
    pub color: Color,
}

impl ItemKind {
    /// Create a new item type
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_stack: u32,
        color: Color,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_stack,
            color,
        }
    }

    /// The item dropped by and placed as `kind`
    #[must_use]
    pub fn for_block(kind: BlockKind) -> Self {
        Self::new(kind.item_id(), kind.name(), DEFAULT_MAX_STACK, kind.color())
    }

    /// Block this item places; unknown ids place a small block
    #[must_use]
    pub fn block_kind(&self) -> BlockKind {
        BlockKind::from_item_id(&self.id).unwrap_or_default()
    }
}

/// A quantity of one item type, outside the inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub count: u32,
}

impl Item {
    /// Create a new item quantity
    #[must_use]
    pub const fn new(kind: ItemKind, count: u32) -> Self {
        Self { kind, count }
    }

    /// `count` units of the item for a block kind
    #[must_use]
    pub fn block(kind: BlockKind, count: u32) -> Self {
        Self::new(ItemKind::for_block(kind), count)
    }

    /// Stacking identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.kind.id
    }
}

/// Contents of one inventory slot.
///
/// A slot is empty iff `count == 0`. Mutators drop the item type whenever
/// the count reaches zero, but readers must still test emptiness by count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    item: Option<ItemKind>,
    count: u32,
}

impl ItemStack {
    /// An empty slot
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: None,
            count: 0,
        }
    }

    /// A slot holding `count` units of `kind`; zero yields an empty slot
    #[must_use]
    pub fn new(kind: ItemKind, count: u32) -> Self {
        if count == 0 {
            Self::empty()
        } else {
            Self {
                item: Some(kind),
                count,
            }
        }
    }

    /// Item type, or `None` for an empty slot
    #[must_use]
    pub fn item(&self) -> Option<&ItemKind> {
        if self.is_empty() {
            None
        } else {
            self.item.as_ref()
        }
    }

    /// Number of units held
    #[inline]
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether the slot holds nothing
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether the slot holds a full stack of its item
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.item().is_some_and(|kind| self.count >= kind.max_stack)
    }

    /// Whether the slot holds units of item `id`
    #[must_use]
    pub fn holds(&self, id: &str) -> bool {
        self.item().is_some_and(|kind| kind.id == id)
    }

    /// Copy of the contents as a free-standing item
    #[must_use]
    pub fn to_item(&self) -> Option<Item> {
        self.item().map(|kind| Item::new(kind.clone(), self.count))
    }

    /// Add up to `amount` units, bounded by the stack limit. Returns the
    /// number actually added.
    pub(crate) fn fill(&mut self, amount: u32) -> u32 {
        let Some(kind) = self.item() else {
            return 0;
        };
        let added = amount.min(kind.max_stack.saturating_sub(self.count));
        self.count += added;
        added
    }

    /// Take up to `amount` units, clearing the slot when it runs out.
    /// Returns the number actually taken.
    pub(crate) fn take(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.count);
        self.count -= taken;
        if self.count == 0 {
            self.item = None;
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_items_use_catalog() {
        let item = ItemKind::for_block(BlockKind::RedBlock);
        assert_eq!(item.id, "red_block");
        assert_eq!(item.name, "Red Block");
        assert_eq!(item.max_stack, 64);
        assert_eq!(item.color, Color::rgb(200, 50, 50));
        assert_eq!(item.block_kind(), BlockKind::RedBlock);
    }

    #[test]
    fn unknown_item_places_small_block() {
        let item = ItemKind::new("mystery", "Mystery", 16, Color::UNKNOWN);
        assert_eq!(item.block_kind(), BlockKind::SmallBlock);
    }

    #[test]
    fn zero_count_stack_is_empty() {
        let stack = ItemStack::new(ItemKind::for_block(BlockKind::Stone), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.item(), None);
        assert!(!stack.holds("stone"));
    }

    #[test]
    fn fill_respects_max_stack() {
        let mut stack = ItemStack::new(ItemKind::for_block(BlockKind::Dirt), 60);
        assert_eq!(stack.fill(10), 4);
        assert!(stack.is_full());
        assert_eq!(stack.fill(1), 0);
    }

    #[test]
    fn take_clears_type_at_zero() {
        let mut stack = ItemStack::new(ItemKind::for_block(BlockKind::Wood), 3);
        assert_eq!(stack.take(5), 3);
        assert!(stack.is_empty());
        assert_eq!(stack, ItemStack::empty());
    }
}
