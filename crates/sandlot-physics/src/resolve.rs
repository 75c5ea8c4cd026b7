//! Minimum-translation collision resolution against static boxes.

use glam::Vec2;
use sandlot_core::Aabb;
use tracing::trace;

use crate::body::KinematicBody;

/// Anything that occupies a box in the world.
pub trait Collider {
    /// Current collision box
    fn aabb(&self) -> Aabb;
}

impl Collider for Aabb {
    #[inline]
    fn aabb(&self) -> Aabb {
        *self
    }
}

/// What a resolution pass ran into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    /// A downward motion was stopped by a top face
    pub landed: bool,
    /// A horizontal push was applied
    pub hit_wall: bool,
    /// An upward motion was stopped by a bottom face
    pub hit_ceiling: bool,
    /// Number of obstacles that required correction
    pub resolved: usize,
}

/// Push `body` out of every obstacle it overlaps.
///
/// Obstacles are processed sequentially in iteration order and the box is
/// re-synchronized after each push, so later obstacles see the corrected
/// position. Tunnelling through thin obstacles at high speed is possible.
pub fn resolve_collisions<'a, C, I>(body: &mut KinematicBody, obstacles: I) -> Contacts
where
    C: Collider + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut contacts = Contacts::default();

    for obstacle in obstacles {
        let other = obstacle.aabb();
        if !body.aabb.intersects(&other) {
            continue;
        }

        let depth = body.aabb.penetration_depth(&other);
        if depth.x.abs() < depth.y.abs() {
            body.position.x += depth.x;
            body.velocity.x = 0.0;
            contacts.hit_wall = true;
        } else {
            body.position.y += depth.y;
            if depth.y < 0.0 && body.velocity.y > 0.0 {
                body.velocity.y = 0.0;
                body.on_ground = true;
                contacts.landed = true;
            } else if depth.y > 0.0 && body.velocity.y < 0.0 {
                body.velocity.y = 0.0;
                contacts.hit_ceiling = true;
            }
        }

        body.sync_aabb();
        contacts.resolved += 1;
    }

    if contacts.resolved > 0 {
        trace!(?contacts, position = ?body.position, "Resolved collisions");
    }

    contacts
}

/// Undo the blocked axis of the last step for a simple mover.
///
/// `mover` is the collision box at its post-step position and `previous` the
/// top-left corner before the step. For each overlapped obstacle the axis
/// with the smaller penetration is reverted to `previous` and its velocity
/// zeroed. `landed` reports a reverted downward motion.
pub fn revert_collisions<'a, C, I>(
    mover: &mut Aabb,
    velocity: &mut Vec2,
    previous: Vec2,
    obstacles: I,
) -> Contacts
where
    C: Collider + 'a,
    I: IntoIterator<Item = &'a C>,
{
    let mut contacts = Contacts::default();

    for obstacle in obstacles {
        let other = obstacle.aabb();
        if !mover.intersects(&other) {
            continue;
        }

        let depth = mover.penetration_depth(&other);
        if depth.x.abs() < depth.y.abs() {
            mover.x = previous.x;
            velocity.x = 0.0;
            contacts.hit_wall = true;
        } else {
            if mover.y > previous.y {
                contacts.landed = true;
            } else if mover.y < previous.y {
                contacts.hit_ceiling = true;
            }
            mover.y = previous.y;
            velocity.y = 0.0;
        }
        contacts.resolved += 1;
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sandlot_core::{Gravity, MovementProfile};

    use crate::body::{integrate, MoveIntent};

    fn body_at(x: f32, y: f32) -> KinematicBody {
        KinematicBody::new(
            Vec2::new(x, y),
            Vec2::splat(32.0),
            MovementProfile::default(),
            Gravity::default(),
        )
    }

    #[test]
    fn falling_body_lands_on_top_face() {
        let floor = [Aabb::new(0.0, 32.0, 32.0, 32.0)];
        let mut body = body_at(0.0, 2.0);
        body.velocity.y = 120.0;
        assert!(body.aabb.intersects(&floor[0]));

        let contacts = resolve_collisions(&mut body, &floor);
        assert!(contacts.landed);
        assert!(body.on_ground);
        assert_eq!(body.velocity.y, 0.0);
        assert_relative_eq!(body.position.y, 0.0);
        assert!(!body.aabb.intersects(&floor[0]));
    }

    #[test]
    fn integrate_then_resolve_keeps_body_on_floor() {
        let floor = [Aabb::new(0.0, 32.0, 32.0, 32.0)];
        let mut body = body_at(0.0, 0.0);
        body.on_ground = true;

        for _ in 0..10 {
            integrate(&mut body, MoveIntent::IDLE, 1.0 / 60.0);
            resolve_collisions(&mut body, &floor);
            assert!(body.on_ground);
            assert_eq!(body.velocity.y, 0.0);
            assert_relative_eq!(body.position.y, 0.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn rising_body_bumps_head() {
        let ceiling = [Aabb::new(0.0, 0.0, 32.0, 32.0)];
        let mut body = body_at(0.0, 30.0);
        body.velocity.y = -200.0;

        let contacts = resolve_collisions(&mut body, &ceiling);
        assert!(contacts.hit_ceiling);
        assert!(!body.on_ground);
        assert_eq!(body.velocity.y, 0.0);
        assert_relative_eq!(body.position.y, 32.0);
    }

    #[test]
    fn side_contact_stops_horizontal_motion() {
        let wall = [Aabb::new(32.0, 0.0, 32.0, 64.0)];
        let mut body = body_at(3.0, 10.0);
        body.velocity = Vec2::new(150.0, 40.0);

        let contacts = resolve_collisions(&mut body, &wall);
        assert!(contacts.hit_wall);
        assert_eq!(body.velocity.x, 0.0);
        assert_relative_eq!(body.velocity.y, 40.0);
        assert_relative_eq!(body.position.x, 0.0);
        assert!(!body.aabb.intersects(&wall[0]));
    }

    #[test]
    fn resolved_body_no_longer_overlaps_any_block() {
        let floor: Vec<Aabb> = (0..4)
            .map(|i| Aabb::new(i as f32 * 32.0, 64.0, 32.0, 32.0))
            .collect();
        let mut body = body_at(40.0, 36.0);
        body.velocity.y = 300.0;

        resolve_collisions(&mut body, &floor);
        for block in &floor {
            assert!(!body.aabb.intersects(block));
        }
        assert!(body.on_ground);
    }

    #[test]
    fn untouched_obstacles_leave_body_alone() {
        let far = [Aabb::new(500.0, 500.0, 32.0, 32.0)];
        let mut body = body_at(0.0, 0.0);
        body.velocity = Vec2::new(10.0, 10.0);
        let before = body;

        let contacts = resolve_collisions(&mut body, &far);
        assert_eq!(contacts, Contacts::default());
        assert_eq!(body, before);
    }

    #[test]
    fn revert_undoes_vertical_step() {
        let floor = [Aabb::new(0.0, 32.0, 64.0, 32.0)];
        let previous = Vec2::new(8.0, 14.0);
        let mut mover = Aabb::new(8.0, 20.0, 16.0, 16.0);
        let mut velocity = Vec2::new(0.0, 6.0);

        let contacts = revert_collisions(&mut mover, &mut velocity, previous, &floor);
        assert!(contacts.landed);
        assert_eq!(mover.min(), previous);
        assert_eq!(velocity, Vec2::ZERO);
    }

    #[test]
    fn revert_undoes_horizontal_step() {
        let wall = [Aabb::new(32.0, 0.0, 32.0, 64.0)];
        let previous = Vec2::new(14.0, 20.0);
        let mut mover = Aabb::new(18.0, 20.0, 16.0, 16.0);
        let mut velocity = Vec2::new(4.0, 1.0);

        let contacts = revert_collisions(&mut mover, &mut velocity, previous, &wall);
        assert!(contacts.hit_wall);
        assert!(!contacts.landed);
        assert_relative_eq!(mover.x, 14.0);
        assert_eq!(velocity.x, 0.0);
        assert_relative_eq!(velocity.y, 1.0);
    }
}
