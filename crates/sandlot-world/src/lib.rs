//! World state and simulation for the Sandlot sandbox.
//!
//! [`World`] owns the player, the static blocks, the item drops and the
//! inventory, and advances them with one [`World::update`] per tick:
//!
//! 1. mode toggle and hotbar selection
//! 2. player integration and collision resolution
//! 3. fall damage, hazard contact and death handling
//! 4. item drop updates (expiry, then pickup)
//! 5. cursor edits: dig, place, pick
//!
//! Everything that changed is reported as [`WorldEvent`]s in the returned
//! [`TickReport`].

mod edit;
mod events;
pub mod generation;
pub mod layout;
mod world;

pub use edit::EditError;
pub use events::{DamageCause, TickReport, WorldEvent};
pub use generation::{TerrainConfig, TerrainGenerator};
pub use world::World;

/// World seed for procedural generation.
pub type WorldSeed = u64;
