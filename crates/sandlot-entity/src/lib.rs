//! Entities of the Sandlot world.
//!
//! Entities are plain values composed from core components: each holds its
//! own box, and anything that takes part in collision implements
//! [`sandlot_physics::Collider`]. The world owns blocks and drops in flat
//! collections; nothing here aliases another entity.

mod block;
mod health;
mod item_drop;
mod player;

pub use block::Block;
pub use health::Health;
pub use item_drop::{DropFate, ItemDrop};
pub use player::Player;
