//! Kinematic integration and collision resolution for the Sandlot sandbox.
//!
//! The physics step is split in two so callers can interleave their own
//! logic (fall damage needs the pre-collision vertical velocity):
//!
//! 1. [`integrate`] applies input, gravity and friction, then moves the body
//!    and clears its ground flag.
//! 2. [`resolve_collisions`] pushes the body out of every obstacle it now
//!    overlaps, zeroing the blocked velocity axis and re-asserting
//!    `on_ground` on landing.
//!
//! Item drops use the cheaper [`revert_collisions`], which undoes the
//! offending axis of the last step instead of computing a push.

mod body;
mod fall;
mod resolve;

pub use body::{integrate, KinematicBody, MoveIntent, StepReport};
pub use fall::fall_damage;
pub use resolve::{resolve_collisions, revert_collisions, Collider, Contacts};
