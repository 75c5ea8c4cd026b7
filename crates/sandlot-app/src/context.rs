//! Application context.

use std::time::Instant;

use glam::Vec2;
use sandlot_input::InputManager;
use sandlot_world::World;

use crate::camera::Camera;

/// Application context shared across all app methods.
///
/// Owns the world being simulated, the input state fed to it and the
/// camera following the player.
pub struct AppContext {
    /// The simulated world.
    pub world: World,
    /// Input state; apps feed device events here.
    pub input: InputManager,
    /// Camera following the player.
    pub camera: Camera,
    /// Total ticks simulated.
    pub tick_count: u64,
    /// Fixed simulation step in seconds.
    pub(crate) dt: f32,
    /// When the run started.
    pub(crate) started: Instant,
}

impl AppContext {
    pub(crate) fn new(world: World, viewport: Vec2) -> Self {
        let mut camera = Camera::new(viewport);
        camera.center_on(world.player().position());
        let dt = world.config().tick_dt();

        Self {
            world,
            input: InputManager::new(),
            camera,
            tick_count: 0,
            dt,
            started: Instant::now(),
        }
    }

    /// Fixed simulation step in seconds.
    pub const fn dt(&self) -> f32 {
        self.dt
    }

    /// Simulated time in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn sim_time(&self) -> f32 {
        self.tick_count as f32 * self.dt
    }

    /// Point the cursor at a screen position.
    pub fn set_cursor_screen(&mut self, screen: Vec2) {
        self.input.set_cursor(self.camera.screen_to_world(screen));
    }

    /// Point the cursor at a world position.
    pub fn set_cursor_world(&mut self, world: Vec2) {
        self.input.set_cursor(world);
    }
}
