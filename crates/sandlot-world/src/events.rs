//! Observable world changes.

use glam::Vec2;
use sandlot_core::{BlockKind, GameMode, GridPos};

/// Why the player lost health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    Fall,
    Hazard,
}

/// Something that happened in the world.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    BlockPlaced { cell: GridPos, kind: BlockKind },
    BlockRemoved { cell: GridPos, kind: BlockKind },
    DropSpawned { position: Vec2, item_id: String },
    /// `count` units moved into the inventory; `remaining` stay in the world
    DropPickedUp {
        item_id: String,
        count: u32,
        remaining: u32,
    },
    DropExpired { item_id: String },
    PlayerDamaged { amount: u32, cause: DamageCause },
    PlayerDied,
    PlayerRespawned { position: Vec2 },
    /// Health restored instead of dying
    PlayerSaved,
    ModeChanged(GameMode),
    SlotSelected(usize),
}

/// Result of one [`crate::World::update`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Tick number, starting at 1
    pub tick: u64,
    /// Events in the order they happened
    pub events: Vec<WorldEvent>,
}

impl TickReport {
    /// Whether any event matches `predicate`
    pub fn any(&self, predicate: impl Fn(&WorldEvent) -> bool) -> bool {
        self.events.iter().any(predicate)
    }

    /// Total damage taken by the player this tick
    #[must_use]
    pub fn damage_taken(&self) -> u32 {
        self.events
            .iter()
            .map(|event| match event {
                WorldEvent::PlayerDamaged { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }
}
