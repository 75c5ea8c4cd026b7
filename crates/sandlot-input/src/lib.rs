//! Input handling for the Sandlot sandbox.
//!
//! Device events are fed into an [`InputManager`] as they arrive; once per
//! tick the manager condenses them into a [`TickInput`], the only thing the
//! simulation reads. Movement, dig and place follow the held state of their
//! bindings, while pick-block, mode toggling and slot digits fire once per
//! press.
//!
//! # Core Types
//!
//! - [`InputManager`]: Button states, scroll, cursor and action mapping
//! - [`ActionMap`]: Maps [`Action`]s to keys and mouse buttons
//! - [`TickInput`]: Per-tick intent consumed by the world

mod action;
mod button_state;
mod input;
mod tick;

pub use action::{Action, ActionMap, InputBinding, Key, MouseButton};
pub use button_state::ButtonState;
pub use input::InputManager;
pub use tick::{Clicks, SlotChange, TickInput};
