//! The player entity.

use glam::Vec2;
use sandlot_core::{Aabb, Color, GridPos, PlayerConfig};
use sandlot_physics::{Collider, KinematicBody};

use crate::health::Health;

/// The controllable mover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// Motion state and collision box
    pub body: KinematicBody,
    /// Hit points
    pub health: Health,
    color: Color,
}

impl Player {
    /// Player at the configured spawn point with full health
    #[must_use]
    pub const fn new(config: &PlayerConfig) -> Self {
        Self {
            body: KinematicBody::new(config.spawn, config.size, config.movement, config.gravity),
            health: Health::new(config.max_health),
            color: Color::PLAYER,
        }
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    #[inline]
    #[must_use]
    pub const fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Grid cell of the player's top-left corner
    #[must_use]
    pub fn cell(&self, grid_size: f32) -> GridPos {
        GridPos::from_world(self.body.position, grid_size)
    }

    /// Put the player back at `spawn`, at rest, with full health
    pub fn respawn(&mut self, spawn: Vec2) {
        self.body.teleport(spawn);
        self.health.restore();
    }
}

impl Collider for Player {
    #[inline]
    fn aabb(&self) -> Aabb {
        self.body.aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_from_config() {
        let player = Player::new(&PlayerConfig::default());
        assert_eq!(player.position(), Vec2::new(320.0, 160.0));
        assert_eq!(player.aabb(), Aabb::new(320.0, 160.0, 32.0, 32.0));
        assert_eq!(player.health.current(), 100);
        assert_eq!(player.color(), Color::rgb(0, 0, 255));
        assert!(!player.on_ground());
    }

    #[test]
    fn cell_floors_position() {
        let mut player = Player::new(&PlayerConfig::default());
        player.body.teleport(Vec2::new(40.0, 63.9));
        assert_eq!(player.cell(32.0), GridPos::new(1, 1));
    }

    #[test]
    fn respawn_restores_state() {
        let mut player = Player::new(&PlayerConfig::default());
        player.body.teleport(Vec2::new(0.0, 900.0));
        player.body.velocity = Vec2::new(3.0, 400.0);
        player.health.take_damage(100);

        player.respawn(Vec2::new(320.0, 160.0));
        assert_eq!(player.position(), Vec2::new(320.0, 160.0));
        assert_eq!(player.velocity(), Vec2::ZERO);
        assert!(player.health.is_alive());
        assert_eq!(player.health.current(), 100);
    }
}
