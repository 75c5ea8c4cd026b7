//! Kinematic state and the per-tick integrator.

use glam::Vec2;
use sandlot_core::{Aabb, Gravity, MovementProfile};

/// Motion state of a mover.
///
/// The collision box is not updated implicitly: every position change must
/// be followed by [`KinematicBody::sync_aabb`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner in world units
    pub position: Vec2,
    /// Velocity in world units per second
    pub velocity: Vec2,
    /// Collision box, synchronized to `position`
    pub aabb: Aabb,
    /// Movement response
    pub movement: MovementProfile,
    /// Gravity acting on this body
    pub gravity: Gravity,
    /// Whether the body ended the last resolution resting on something
    pub on_ground: bool,
}

impl KinematicBody {
    /// Create a body at rest
    #[must_use]
    pub const fn new(
        position: Vec2,
        size: Vec2,
        movement: MovementProfile,
        gravity: Gravity,
    ) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            aabb: Aabb::from_position_size(position, size),
            movement,
            gravity,
            on_ground: false,
        }
    }

    /// Move the collision box to the current position
    #[inline]
    pub fn sync_aabb(&mut self) {
        self.aabb.set_position(self.position);
    }

    /// Place the body at `position` at rest and airborne
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.on_ground = false;
        self.sync_aabb();
    }
}

/// Movement requested for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    /// Horizontal direction, -1 (left) to 1 (right)
    pub horizontal: f32,
    /// Jump requested (only honoured on the ground)
    pub jump: bool,
    /// Push downward (half strength on the ground)
    pub descend: bool,
}

impl MoveIntent {
    /// Intent that does nothing
    pub const IDLE: Self = Self {
        horizontal: 0.0,
        jump: false,
        descend: false,
    };
}

/// Values captured during integration that later stages need.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Vertical velocity just before the position step, used as the impact
    /// speed for fall damage
    pub previous_vertical_velocity: f32,
}

/// Advance a body by one tick of `dt` seconds.
///
/// Order: input acceleration, jump impulse, gravity, horizontal decay,
/// position step. The ground flag is cleared afterwards and must be
/// re-established by [`crate::resolve_collisions`].
pub fn integrate(body: &mut KinematicBody, intent: MoveIntent, dt: f32) -> StepReport {
    let speed = body.movement.speed(body.on_ground);
    body.velocity.x += intent.horizontal.clamp(-1.0, 1.0) * speed * dt;

    if intent.jump && body.on_ground {
        body.velocity.y = -body.movement.jump_force;
    }
    if intent.descend {
        let push = if body.on_ground { speed * 0.5 } else { speed };
        body.velocity.y += push * dt;
    }

    body.velocity.y += body.gravity.delta(dt);
    body.velocity.x *= body.movement.decay(body.on_ground);

    let report = StepReport {
        previous_vertical_velocity: body.velocity.y,
    };

    body.position += body.velocity * dt;
    body.on_ground = false;
    body.sync_aabb();

    report
}
