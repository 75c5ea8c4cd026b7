//! Core types, geometry, and configuration for the Sandlot sandbox.
//!
//! This crate provides the foundational types used throughout the game:
//! - The axis-aligned [`Aabb`] box primitive and its overlap math
//! - Grid coordinates and snapping for block placement
//! - Block kinds, colors, and the game mode
//! - The centralized [`GameConfig`] and common error types

pub mod config;
pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use config::{
    DropConfig, FallDamageConfig, GameConfig, Gravity, InventoryConfig, MovementProfile,
    PlayerConfig,
};
pub use coords::{snap_to_grid, GridPos};
pub use error::{Error, Result};
pub use math::Aabb;
pub use types::{BlockKind, Color, GameMode};

/// Game-wide constants
pub mod constants {
    /// Nominal simulation rate in ticks per second
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation step in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE;
    /// Edge length of a grid cell (and of a placed block) in world units
    pub const GRID_SIZE: f32 = 32.0;
    /// Default maximum stack size for block items
    pub const DEFAULT_MAX_STACK: u32 = 64;
}
