//! Game actions and their input bindings.

use hashbrown::HashMap;

/// Keyboard keys the sandbox responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    S,
    W,
    G,
    Space,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    /// Number row key 1-9
    Digit(u8),
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// An input that can be bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputBinding {
    /// A keyboard key.
    Key(Key),
    /// A mouse button.
    Mouse(MouseButton),
}

impl From<Key> for InputBinding {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<MouseButton> for InputBinding {
    fn from(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Something the player can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Descend,
    /// Remove the block under the cursor (held)
    Dig,
    /// Place the selected item under the cursor (held)
    Place,
    /// Select the hotbar slot holding the block under the cursor
    Pick,
    ToggleMode,
}

/// Action mapping.
///
/// Each action may have several bindings; it is active while any of them is.
#[derive(Debug, Clone)]
pub struct ActionMap {
    bindings: HashMap<Action, Vec<InputBinding>>,
}

impl ActionMap {
    /// An action map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Add a binding to an action.
    pub fn bind(&mut self, action: Action, binding: impl Into<InputBinding>) {
        let binding = binding.into();
        let bindings = self.bindings.entry(action).or_default();
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
    }

    /// Builder-style [`ActionMap::bind`].
    #[must_use]
    pub fn with(mut self, action: Action, binding: impl Into<InputBinding>) -> Self {
        self.bind(action, binding);
        self
    }

    /// Remove a binding from an action.
    pub fn unbind(&mut self, action: Action, binding: InputBinding) {
        if let Some(bindings) = self.bindings.get_mut(&action) {
            bindings.retain(|b| *b != binding);
        }
    }

    /// Bindings for an action.
    #[must_use]
    pub fn bindings(&self, action: Action) -> &[InputBinding] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for ActionMap {
    /// Arrow keys or WASD to move, Space/W/Up to jump, S to push down,
    /// left/right/middle mouse to dig/place/pick and G for game mode.
    fn default() -> Self {
        Self::empty()
            .with(Action::MoveLeft, Key::A)
            .with(Action::MoveLeft, Key::ArrowLeft)
            .with(Action::MoveRight, Key::D)
            .with(Action::MoveRight, Key::ArrowRight)
            .with(Action::Jump, Key::Space)
            .with(Action::Jump, Key::W)
            .with(Action::Jump, Key::ArrowUp)
            .with(Action::Descend, Key::S)
            .with(Action::Descend, Key::ArrowDown)
            .with(Action::Dig, MouseButton::Left)
            .with(Action::Place, MouseButton::Right)
            .with(Action::Pick, MouseButton::Middle)
            .with(Action::ToggleMode, Key::G)
    }
}
