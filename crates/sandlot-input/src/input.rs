//! Input manager turning raw button events into per-tick intent.

use glam::Vec2;
use hashbrown::HashMap;
use tracing::trace;

use crate::action::{Action, ActionMap, InputBinding, Key};
use crate::button_state::ButtonState;
use crate::tick::{Clicks, SlotChange, TickInput};

/// Input manager combining button states, scroll, cursor and action mapping.
///
/// # Usage
///
/// ```
/// use glam::Vec2;
/// use sandlot_input::{InputManager, Key, MouseButton};
///
/// let mut input = InputManager::new();
///
/// // Feed device events as they arrive
/// input.press(Key::D);
/// input.press(MouseButton::Left);
/// input.set_cursor(Vec2::new(40.0, 40.0));
///
/// // Once per tick
/// let tick = input.tick_input();
/// assert_eq!(tick.horizontal, 1.0);
///
/// // MUST call after the tick has been simulated
/// input.end_tick();
/// ```
#[derive(Debug, Default)]
pub struct InputManager {
    /// State of every input seen so far.
    buttons: HashMap<InputBinding, ButtonState>,
    /// Scroll accumulated this tick; positive is wheel up.
    scroll: f32,
    /// Cursor in world coordinates.
    cursor: Vec2,
    /// Action mappings.
    actions: ActionMap,
}

impl InputManager {
    /// Create an input manager with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input manager with custom bindings.
    #[must_use]
    pub fn with_actions(actions: ActionMap) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    /// Mutable access to the action map for runtime rebinding.
    pub fn actions_mut(&mut self) -> &mut ActionMap {
        &mut self.actions
    }

    /// Record a key or button going down.
    pub fn press(&mut self, binding: impl Into<InputBinding>) {
        let binding = binding.into();
        trace!(?binding, "Pressed");
        self.buttons.entry(binding).or_default().press();
    }

    /// Record a key or button going up.
    pub fn release(&mut self, binding: impl Into<InputBinding>) {
        let binding = binding.into();
        trace!(?binding, "Released");
        self.buttons.entry(binding).or_default().release();
    }

    /// Accumulate wheel movement; positive is up.
    pub fn scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    /// Set the cursor position in world coordinates.
    pub fn set_cursor(&mut self, world: Vec2) {
        self.cursor = world;
    }

    /// Cursor position in world coordinates.
    #[must_use]
    pub const fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// State of one key or button.
    #[must_use]
    pub fn button(&self, binding: impl Into<InputBinding>) -> ButtonState {
        self.buttons
            .get(&binding.into())
            .copied()
            .unwrap_or_default()
    }

    /// Combined state of all bindings of `action`.
    #[must_use]
    pub fn action(&self, action: Action) -> ButtonState {
        ButtonState::merge(
            self.actions
                .bindings(action)
                .iter()
                .map(|binding| self.button(*binding)),
        )
    }

    /// Returns `true` while the action is held.
    #[must_use]
    pub fn is_action_pressed(&self, action: Action) -> bool {
        self.action(action).is_pressed()
    }

    /// Returns `true` on the tick the action starts.
    #[must_use]
    pub fn is_action_just_pressed(&self, action: Action) -> bool {
        self.action(action).is_just_pressed()
    }

    /// Snapshot of the intent for the current tick.
    #[must_use]
    pub fn tick_input(&self) -> TickInput {
        let mut horizontal = 0.0;
        if self.is_action_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_action_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }

        let mut clicks = Clicks::empty();
        clicks.set(Clicks::DIG, self.is_action_pressed(Action::Dig));
        clicks.set(Clicks::PLACE, self.is_action_pressed(Action::Place));
        clicks.set(Clicks::PICK, self.is_action_just_pressed(Action::Pick));

        TickInput {
            horizontal,
            jump: self.is_action_pressed(Action::Jump),
            descend: self.is_action_pressed(Action::Descend),
            clicks,
            slot: self.slot_change(),
            toggle_mode: self.is_action_just_pressed(Action::ToggleMode),
            cursor: self.cursor,
        }
    }

    /// Settle button edges and clear per-tick accumulators.
    pub fn end_tick(&mut self) {
        for state in self.buttons.values_mut() {
            state.end_tick();
        }
        self.scroll = 0.0;
    }

    /// Release everything, e.g. when focus is lost.
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.scroll = 0.0;
    }

    /// Digit keys win over the wheel; wheel up selects the previous slot.
    fn slot_change(&self) -> Option<SlotChange> {
        let digit = (1..=9u8).find(|&n| self.button(Key::Digit(n)).is_just_pressed());
        if let Some(n) = digit {
            return Some(SlotChange::Select(usize::from(n - 1)));
        }

        if self.scroll > 0.0 {
            Some(SlotChange::Previous)
        } else if self.scroll < 0.0 {
            Some(SlotChange::Next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MouseButton;

    #[test]
    fn opposing_directions_cancel() {
        let mut input = InputManager::new();
        input.press(Key::A);
        assert_eq!(input.tick_input().horizontal, -1.0);
        input.press(Key::ArrowRight);
        assert_eq!(input.tick_input().horizontal, 0.0);
    }

    #[test]
    fn dig_is_held_pick_is_edge() {
        let mut input = InputManager::new();
        input.press(MouseButton::Left);
        input.press(MouseButton::Middle);

        let first = input.tick_input();
        assert!(first.clicks.contains(Clicks::DIG | Clicks::PICK));
        input.end_tick();

        let second = input.tick_input();
        assert!(second.clicks.contains(Clicks::DIG));
        assert!(!second.clicks.contains(Clicks::PICK));
        input.end_tick();

        input.release(MouseButton::Left);
        assert!(input.tick_input().clicks.is_empty());
    }

    #[test]
    fn digit_selects_slot_once() {
        let mut input = InputManager::new();
        input.press(Key::Digit(3));
        assert_eq!(input.tick_input().slot, Some(SlotChange::Select(2)));
        input.end_tick();
        assert_eq!(input.tick_input().slot, None);
    }

    #[test]
    fn wheel_direction() {
        let mut input = InputManager::new();
        input.scroll(1.0);
        assert_eq!(input.tick_input().slot, Some(SlotChange::Previous));
        input.end_tick();
        input.scroll(-2.0);
        assert_eq!(input.tick_input().slot, Some(SlotChange::Next));
        input.end_tick();
        assert_eq!(input.tick_input().slot, None);
    }

    #[test]
    fn toggle_mode_fires_once_per_press() {
        let mut input = InputManager::new();
        input.press(Key::G);
        assert!(input.tick_input().toggle_mode);
        input.end_tick();
        assert!(!input.tick_input().toggle_mode);
    }

    #[test]
    fn second_binding_does_not_retrigger_held_action() {
        let mut input = InputManager::new();
        input.press(Key::Space);
        input.end_tick();
        input.press(Key::W);
        assert!(input.is_action_pressed(Action::Jump));
        assert!(!input.is_action_just_pressed(Action::Jump));
    }

    #[test]
    fn cursor_passes_through() {
        let mut input = InputManager::new();
        input.set_cursor(Vec2::new(12.0, 34.0));
        assert_eq!(input.tick_input().cursor, Vec2::new(12.0, 34.0));
    }
}
