//! 2D follow camera.

use glam::Vec2;
use sandlot_core::Aabb;

/// Smoothing factor applied per tick when following a target.
pub const FOLLOW_SMOOTHING: f32 = 0.1;

/// Camera looking at a rectangular window of the world.
///
/// `position` is the world point shown at the top-left of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec2,
    /// Visible area in world units
    pub viewport: Vec2,
    pub smoothing: f32,
}

impl Camera {
    #[must_use]
    pub const fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport,
            smoothing: FOLLOW_SMOOTHING,
        }
    }

    /// Camera position that centres `target` on screen.
    #[inline]
    #[must_use]
    pub fn target_for(&self, target: Vec2) -> Vec2 {
        target - self.viewport * 0.5
    }

    /// Move a fraction of the way towards centring `target`.
    pub fn follow(&mut self, target: Vec2) {
        let goal = self.target_for(target);
        self.position += (goal - self.position) * self.smoothing;
    }

    /// Jump straight to centring `target`.
    pub fn center_on(&mut self, target: Vec2) {
        self.position = self.target_for(target);
    }

    #[inline]
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position
    }

    #[inline]
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position
    }

    /// The visible world rectangle.
    #[must_use]
    pub fn view(&self) -> Aabb {
        Aabb::from_position_size(self.position, self.viewport)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn follow_closes_a_tenth_of_the_gap() {
        let mut camera = Camera::default();
        camera.follow(Vec2::new(400.0, 300.0));
        assert_eq!(camera.position, Vec2::ZERO);

        camera.follow(Vec2::new(500.0, 300.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 0.0);
    }

    #[test]
    fn follow_converges() {
        let mut camera = Camera::default();
        for _ in 0..200 {
            camera.follow(Vec2::new(1000.0, 1000.0));
        }
        assert_relative_eq!(camera.position.x, 600.0, epsilon = 0.01);
        assert_relative_eq!(camera.position.y, 700.0, epsilon = 0.01);
    }

    #[test]
    fn screen_world_conversion() {
        let mut camera = Camera::default();
        camera.center_on(Vec2::new(420.0, 310.0));
        let world = camera.screen_to_world(Vec2::new(5.0, 7.0));
        assert_eq!(world, Vec2::new(25.0, 17.0));
        assert_eq!(camera.world_to_screen(world), Vec2::new(5.0, 7.0));
    }
}
