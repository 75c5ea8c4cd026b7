//! The per-tick input snapshot consumed by the world.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Cursor actions requested this tick.
    ///
    /// `DIG` and `PLACE` are level-triggered (set every tick the button is
    /// held), `PICK` is edge-triggered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Clicks: u8 {
        /// Remove the block under the cursor.
        const DIG   = 0b0000_0001;
        /// Place the selected item under the cursor.
        const PLACE = 0b0000_0010;
        /// Select the slot holding the block under the cursor.
        const PICK  = 0b0000_0100;
    }
}

/// Hotbar selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotChange {
    Next,
    Previous,
    /// Hotbar index, 0-based
    Select(usize),
}

/// Everything the world needs from input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Horizontal direction, -1 to 1
    pub horizontal: f32,
    pub jump: bool,
    pub descend: bool,
    pub clicks: Clicks,
    pub slot: Option<SlotChange>,
    pub toggle_mode: bool,
    /// Cursor in world coordinates
    pub cursor: Vec2,
}

impl TickInput {
    /// Input that does nothing, with the cursor at `cursor`
    #[must_use]
    pub fn idle_at(cursor: Vec2) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_horizontal(mut self, horizontal: f32) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub const fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    #[must_use]
    pub const fn with_clicks(mut self, clicks: Clicks) -> Self {
        self.clicks = clicks;
        self
    }

    #[must_use]
    pub const fn with_slot(mut self, slot: SlotChange) -> Self {
        self.slot = Some(slot);
        self
    }

    #[must_use]
    pub const fn with_cursor(mut self, cursor: Vec2) -> Self {
        self.cursor = cursor;
        self
    }
}
