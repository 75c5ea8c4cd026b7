//! Press/release tracking for keys, mouse buttons and actions.

/// State of a button across ticks.
///
/// Hold-driven actions (dig, place, movement) read [`ButtonState::is_pressed`];
/// edge-driven ones (pick block, mode toggle, slot digits) read
/// [`ButtonState::is_just_pressed`], which holds for exactly one tick.
///
/// State transitions:
/// ```text
/// Released ─press()─> JustPressed ─end_tick()─> Pressed
///     ^                                             │
///     │                                          release()
///     │                                             v
///     └────────────end_tick()───────────── JustReleased
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Button was pressed this tick.
    JustPressed,
    /// Button is being held down.
    Pressed,
    /// Button was released this tick.
    JustReleased,
    /// Button is not pressed.
    #[default]
    Released,
}

impl ButtonState {
    /// Down this tick, whether newly or still. Dig and place repeat on this.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Pressed)
    }

    /// Went down this tick. Pick block and mode toggle fire on this.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    #[inline]
    #[must_use]
    pub const fn is_just_released(self) -> bool {
        matches!(self, Self::JustReleased)
    }

    /// Up this tick, including the tick it was let go.
    #[inline]
    #[must_use]
    pub const fn is_released(self) -> bool {
        matches!(self, Self::JustReleased | Self::Released)
    }

    /// Record a press. Repeated presses while down (key repeat) keep the
    /// current state so an edge is never reported twice.
    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    /// Record a release; a no-op while already up.
    #[inline]
    pub fn release(&mut self) {
        if self.is_pressed() {
            *self = Self::JustReleased;
        }
    }

    /// Press or release depending on `down`.
    #[inline]
    pub fn set(&mut self, down: bool) {
        if down {
            self.press();
        } else {
            self.release();
        }
    }

    /// Combine the states of several bindings of one action.
    ///
    /// The result is pressed if any input is held and just pressed only if
    /// none was already held before this tick.
    #[must_use]
    pub fn merge(states: impl IntoIterator<Item = Self>) -> Self {
        let mut any_held = false;
        let mut any_just_pressed = false;
        let mut any_just_released = false;
        for state in states {
            match state {
                Self::Pressed => any_held = true,
                Self::JustPressed => any_just_pressed = true,
                Self::JustReleased => any_just_released = true,
                Self::Released => {}
            }
        }

        if any_held {
            Self::Pressed
        } else if any_just_pressed {
            Self::JustPressed
        } else if any_just_released {
            Self::JustReleased
        } else {
            Self::Released
        }
    }

    /// Called once per tick to settle just-pressed/released states.
    #[inline]
    pub fn end_tick(&mut self) {
        match *self {
            Self::JustPressed => *self = Self::Pressed,
            Self::JustReleased => *self = Self::Released,
            _ => {}
        }
    }
}
