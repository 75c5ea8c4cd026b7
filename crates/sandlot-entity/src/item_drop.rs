//! Item drops: pick-up-able items simulated in the world.
//!
//! A drop falls under gravity that is never switched off, drifts toward a
//! nearby player, stops on blocks by undoing the blocked axis of its last
//! step, and shrinks through the second half of its lifetime. Its velocity
//! is expressed per nominal tick, so displacement and drag scale with
//! `dt * tick_rate`.

use glam::Vec2;
use sandlot_core::{Aabb, Color, DropConfig};
use sandlot_inventory::Item;
use sandlot_physics::{revert_collisions, Collider};

/// What should happen to a drop after its update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropFate {
    /// Stays in the world
    Active,
    /// Lifetime exceeded: discard
    Expired,
    /// Close enough to the player: move into the inventory
    PickedUp,
}

/// An item lying (or falling) in the world.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDrop {
    position: Vec2,
    velocity: Vec2,
    /// Visual box; shrinks late in life
    aabb: Aabb,
    item: Item,
    life: f32,
    on_ground: bool,
}

impl ItemDrop {
    /// New drop at rest with its top-left corner at `position`
    #[must_use]
    pub fn new(position: Vec2, item: Item, config: &DropConfig) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            aabb: Aabb::square(position, config.size),
            item,
            life: 0.0,
            on_ground: false,
        }
    }

    /// Set the initial velocity
    #[must_use]
    pub const fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    #[must_use]
    pub const fn item(&self) -> &Item {
        &self.item
    }

    /// Mutable access to the carried item, for partial pickups
    #[inline]
    pub fn item_mut(&mut self) -> &mut Item {
        &mut self.item
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.item.kind.color
    }

    /// Seconds since spawn
    #[inline]
    #[must_use]
    pub const fn life(&self) -> f32 {
        self.life
    }

    /// Whether the last step was stopped by a surface below
    #[inline]
    #[must_use]
    pub const fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Current visual size
    #[inline]
    #[must_use]
    pub const fn current_size(&self) -> Vec2 {
        self.aabb.size()
    }

    /// Advance the drop by `dt` seconds.
    pub fn update<'a, C, I>(
        &mut self,
        player_position: Vec2,
        dt: f32,
        tick_rate: f32,
        config: &DropConfig,
        obstacles: I,
    ) where
        C: Collider + 'a,
        I: IntoIterator<Item = &'a C>,
    {
        self.life += dt;
        self.velocity.y += config.gravity.delta(dt);

        let to_player = player_position - self.position;
        let distance = to_player.length();
        if distance <= config.attraction_distance && distance > config.pickup_distance * 0.5 {
            let pull = config.attraction_strength * (config.attraction_distance - distance)
                / config.attraction_distance;
            self.velocity += to_player / distance * pull * dt;
        }

        let steps = dt * tick_rate;
        self.velocity *= config.drag.powf(steps);

        let previous = self.position;
        let mut collider = Aabb::square(self.position + self.velocity * steps, config.size);
        let contacts = revert_collisions(&mut collider, &mut self.velocity, previous, obstacles);
        self.position = collider.min();
        self.on_ground = contacts.landed;

        let size = shrunk_size(config.size, self.life / config.lifetime);
        self.aabb = Aabb::square(self.position, size);
    }

    /// Whether the drop has outlived `config.lifetime`
    #[must_use]
    pub fn should_disappear(&self, config: &DropConfig) -> bool {
        self.life >= config.lifetime
    }

    /// Whether the player at `player_position` collects the drop.
    ///
    /// Always false once expired.
    #[must_use]
    pub fn should_pickup(&self, player_position: Vec2, config: &DropConfig) -> bool {
        !self.should_disappear(config)
            && self.position.distance(player_position) <= config.pickup_distance
    }

    /// Expiry takes precedence over pickup
    #[must_use]
    pub fn fate(&self, player_position: Vec2, config: &DropConfig) -> DropFate {
        if self.should_disappear(config) {
            DropFate::Expired
        } else if self.should_pickup(player_position, config) {
            DropFate::PickedUp
        } else {
            DropFate::Active
        }
    }
}

/// Full size for the first half of life, then linearly down to zero.
fn shrunk_size(size: f32, life_ratio: f32) -> f32 {
    if life_ratio <= 0.5 {
        size
    } else {
        let progress = ((life_ratio - 0.5) / 0.5).min(1.0);
        size * (1.0 - progress)
    }
}
