//! Hit points.

use serde::{Deserialize, Serialize};

/// Hit points of a damageable entity.
///
/// Invariants: `current <= max`, and `alive == (current > 0)` is updated
/// eagerly by every mutator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    current: u32,
    max: u32,
    alive: bool,
}

impl Health {
    /// Full health
    #[must_use]
    pub const fn new(max: u32) -> Self {
        Self {
            current: max,
            max,
            alive: max > 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Lose `amount` hit points, stopping at zero.
    ///
    /// Returns `true` only on the call that kills.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.alive;
        self.current = self.current.saturating_sub(amount);
        self.alive = self.current > 0;
        was_alive && !self.alive
    }

    /// Regain `amount` hit points, stopping at `max`
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
        self.alive = self.current > 0;
    }

    /// Heal to full
    pub fn restore(&mut self) {
        self.heal(self.max);
    }

    /// Change the maximum, clamping the current value
    pub fn set_max_health(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
        self.alive = self.current > 0;
    }

    /// Current health as a percentage of max (0 when max is 0)
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32 * 100.0
        }
    }
}
