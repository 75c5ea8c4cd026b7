//! Centralized game configuration.
//!
//! Every tunable constant lives in [`GameConfig`] and is passed explicitly
//! into the integrator, resolver, drop updater and inventory so that no two
//! subsystems can disagree on, say, the gravity magnitude.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{GRID_SIZE, TICK_RATE};
use crate::error::{Error, Result};

/// Horizontal movement response and jump strength of a mover.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementProfile {
    /// Horizontal acceleration while grounded (units/s²)
    pub ground_speed: f32,
    /// Horizontal acceleration while airborne (units/s²)
    pub air_speed: f32,
    /// Horizontal velocity multiplier per tick while grounded
    pub ground_friction: f32,
    /// Horizontal velocity multiplier per tick while airborne
    pub air_resistance: f32,
    /// Upward velocity set by a jump (units/s)
    pub jump_force: f32,
}

impl Default for MovementProfile {
    fn default() -> Self {
        Self {
            ground_speed: 10_000.0,
            air_speed: 1_500.0,
            ground_friction: 0.8,
            air_resistance: 0.95,
            jump_force: 300.0,
        }
    }
}

impl MovementProfile {
    /// Acceleration for the current contact state
    #[inline]
    #[must_use]
    pub const fn speed(&self, on_ground: bool) -> f32 {
        if on_ground {
            self.ground_speed
        } else {
            self.air_speed
        }
    }

    /// Horizontal decay coefficient for the current contact state
    #[inline]
    #[must_use]
    pub const fn decay(&self, on_ground: bool) -> f32 {
        if on_ground {
            self.ground_friction
        } else {
            self.air_resistance
        }
    }
}

/// Constant downward acceleration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gravity {
    /// Whether gravity is applied at all
    pub enabled: bool,
    /// Acceleration magnitude (units/s²)
    pub force: f32,
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(300.0)
    }
}

impl Gravity {
    /// Enabled gravity with the given force
    #[must_use]
    pub const fn new(force: f32) -> Self {
        Self {
            enabled: true,
            force,
        }
    }

    /// Disabled gravity
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            force: 0.0,
        }
    }

    /// Vertical velocity gained over `dt` seconds
    #[inline]
    #[must_use]
    pub fn delta(&self, dt: f32) -> f32 {
        if self.enabled {
            self.force * dt
        } else {
            0.0
        }
    }
}

/// Player construction parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Collision box size
    pub size: Vec2,
    /// Spawn and respawn position (top-left)
    pub spawn: Vec2,
    /// Maximum hit points
    pub max_health: u32,
    /// Movement response
    pub movement: MovementProfile,
    /// Gravity acting on the player
    pub gravity: Gravity,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: Vec2::splat(32.0),
            spawn: Vec2::new(320.0, 160.0),
            max_health: 100,
            movement: MovementProfile::default(),
            gravity: Gravity::default(),
        }
    }
}

/// Fall damage curve thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallDamageConfig {
    /// Impact speed at or below which no damage is dealt
    pub min_speed: f32,
    /// Impact speed at or above which `max_damage` is dealt
    pub max_speed: f32,
    /// Damage dealt at `max_speed`
    pub max_damage: u32,
}

impl Default for FallDamageConfig {
    fn default() -> Self {
        Self {
            min_speed: 400.0,
            max_speed: 800.0,
            max_damage: 20,
        }
    }
}

/// Item drop behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropConfig {
    /// Edge length of a freshly spawned drop
    pub size: f32,
    /// Distance at which the player collects a drop
    pub pickup_distance: f32,
    /// Distance within which a drop is pulled toward the player
    pub attraction_distance: f32,
    /// Pull strength at zero distance (per nominal tick, per second)
    pub attraction_strength: f32,
    /// Velocity multiplier per nominal tick
    pub drag: f32,
    /// Seconds before a drop expires
    pub lifetime: f32,
    /// Gravity acting on drops
    pub gravity: Gravity,
    /// Magnitude of the random velocity given to drops from broken blocks
    pub scatter: f32,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            size: 16.0,
            pickup_distance: 32.0,
            attraction_distance: 100.0,
            attraction_strength: 100.0,
            drag: 0.9,
            lifetime: 60.0,
            gravity: Gravity::default(),
            scatter: 0.0,
        }
    }
}

/// Inventory dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Total slot count
    pub slots: usize,
    /// Leading slots forming the hotbar
    pub hotbar: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { slots: 27, hotbar: 9 }
    }
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Nominal ticks per second
    pub tick_rate: f32,
    /// Grid cell size for block placement
    pub grid_size: f32,
    /// Player parameters
    pub player: PlayerConfig,
    /// Fall damage curve
    pub fall: FallDamageConfig,
    /// Damage per tick while touching a hazard block
    pub hazard_damage: u32,
    /// Item drop parameters
    pub drops: DropConfig,
    /// Inventory dimensions
    pub inventory: InventoryConfig,
    /// Seed for the scatter RNG
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            grid_size: GRID_SIZE,
            player: PlayerConfig::default(),
            fall: FallDamageConfig::default(),
            hazard_damage: 5,
            drops: DropConfig::default(),
            inventory: InventoryConfig::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Fixed step length in seconds
    #[inline]
    #[must_use]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// Set the player spawn point.
    #[must_use]
    pub const fn with_spawn(mut self, spawn: Vec2) -> Self {
        self.player.spawn = spawn;
        self
    }

    /// Set the player's maximum health.
    #[must_use]
    pub const fn with_max_health(mut self, max_health: u32) -> Self {
        self.player.max_health = max_health;
        self
    }

    /// Set the player's movement profile.
    #[must_use]
    pub const fn with_movement(mut self, movement: MovementProfile) -> Self {
        self.player.movement = movement;
        self
    }

    /// Set the gravity force for both the player and drops.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.player.gravity = gravity;
        self.drops.gravity = gravity;
        self
    }

    /// Set the fall damage curve.
    #[must_use]
    pub const fn with_fall_damage(mut self, fall: FallDamageConfig) -> Self {
        self.fall = fall;
        self
    }

    /// Set the drop parameters.
    #[must_use]
    pub const fn with_drops(mut self, drops: DropConfig) -> Self {
        self.drops = drops;
        self
    }

    /// Set the inventory dimensions.
    #[must_use]
    pub const fn with_inventory(mut self, slots: usize, hotbar: usize) -> Self {
        self.inventory = InventoryConfig { slots, hotbar };
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that all values are usable by the simulation.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        fn unit(name: &str, value: f32) -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )))
            }
        }

        positive("tick_rate", self.tick_rate)?;
        positive("grid_size", self.grid_size)?;
        positive("player.size.x", self.player.size.x)?;
        positive("player.size.y", self.player.size.y)?;
        positive("drops.size", self.drops.size)?;
        positive("drops.lifetime", self.drops.lifetime)?;
        positive("drops.pickup_distance", self.drops.pickup_distance)?;
        positive("drops.attraction_distance", self.drops.attraction_distance)?;
        unit("player.movement.ground_friction", self.player.movement.ground_friction)?;
        unit("player.movement.air_resistance", self.player.movement.air_resistance)?;
        unit("drops.drag", self.drops.drag)?;

        if self.player.max_health == 0 {
            return Err(Error::InvalidConfig(
                "player.max_health must be at least 1".to_string(),
            ));
        }
        if self.fall.max_speed <= self.fall.min_speed {
            return Err(Error::InvalidConfig(format!(
                "fall.max_speed ({}) must exceed fall.min_speed ({})",
                self.fall.max_speed, self.fall.min_speed
            )));
        }
        if self.inventory.hotbar == 0 || self.inventory.hotbar > self.inventory.slots {
            return Err(Error::InvalidConfig(format!(
                "inventory.hotbar must be in 1..={}, got {}",
                self.inventory.slots, self.inventory.hotbar
            )));
        }
        if self.drops.attraction_distance < self.drops.pickup_distance * 0.5 {
            return Err(Error::InvalidConfig(
                "drops.attraction_distance must be at least half the pickup distance".to_string(),
            ));
        }

        Ok(())
    }
}
