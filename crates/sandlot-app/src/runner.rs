//! Application runner and tick loop.

use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use sandlot_core::GameConfig;
use sandlot_world::World;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::app::SandboxApp;
use crate::context::AppContext;
use crate::frame::FrameContext;

/// Which world the runner starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Starter blocks and a stocked inventory.
    Starter,
    /// Nothing but the player.
    Empty,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Application name, used in logs.
    pub title: String,
    /// Simulation tunables.
    pub game: GameConfig,
    /// Starting scene.
    pub scene: Scene,
    /// Visible area in world units, for the camera.
    pub viewport: Vec2,
    /// Stop after this many ticks (None to run until the app exits).
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to keep wall-clock pace.
    pub realtime: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sandlot".to_string(),
            game: GameConfig::default(),
            scene: Scene::Starter,
            viewport: Vec2::new(800.0, 600.0),
            max_ticks: None,
            realtime: false,
        }
    }
}

impl AppConfig {
    /// Create a new config with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the simulation tunables.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the starting scene.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Set the camera viewport.
    #[must_use]
    pub const fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Vec2::new(width, height);
        self
    }

    /// Stop after `ticks` ticks.
    #[must_use]
    pub const fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Enable or disable wall-clock pacing.
    #[must_use]
    pub const fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }
}

/// Run a `SandboxApp` with the given configuration.
///
/// This function initializes logging, builds the world and runs the tick
/// loop until the application exits or `max_ticks` is reached.
pub fn run_app<A: SandboxApp>(config: AppConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run_loop::<A>(config).map(|_| ())
}

/// Run the tick loop without touching global logging state.
///
/// Returns the context after cleanup so callers can inspect the final world.
pub fn run_loop<A: SandboxApp>(config: AppConfig) -> anyhow::Result<AppContext> {
    info!("{} starting...", config.title);

    let world = match config.scene {
        Scene::Starter => World::starter(config.game.clone())?,
        Scene::Empty => World::new(config.game.clone())?,
    };
    let mut ctx = AppContext::new(world, config.viewport);
    let mut app = A::init(&mut ctx)?;

    let target_tick_time = config.realtime.then(|| Duration::from_secs_f32(ctx.dt));

    info!("Application ready!");

    loop {
        if config.max_ticks.is_some_and(|max| ctx.tick_count >= max) {
            debug!(ticks = ctx.tick_count, "Tick limit reached");
            break;
        }

        let tick_start = Instant::now();
        let frame = step(&mut app, &mut ctx);
        app.update(&ctx, &frame);
        app.render(&ctx, &frame)?;

        if app.should_exit(&ctx) {
            info!(tick = ctx.tick_count, "Exit requested");
            break;
        }

        // Tick pacing
        if let Some(target) = target_tick_time {
            let elapsed = tick_start.elapsed();
            if elapsed < target {
                thread::sleep(target - elapsed);
            }
        }
    }

    cleanup(&mut app, &mut ctx);
    Ok(ctx)
}

/// Simulate one tick: input, world update, camera follow.
fn step<A: SandboxApp>(app: &mut A, ctx: &mut AppContext) -> FrameContext {
    app.input(ctx);

    let input = ctx.input.tick_input();
    let report = ctx.world.update(ctx.dt, &input);
    ctx.input.end_tick();

    ctx.camera.follow(ctx.world.player().position());
    ctx.tick_count += 1;

    FrameContext::new(report, ctx.dt, ctx.tick_count)
}

fn cleanup<A: SandboxApp>(app: &mut A, ctx: &mut AppContext) {
    let elapsed = ctx.started.elapsed();
    info!("Run statistics:");
    info!("  Ticks: {}", ctx.tick_count);
    info!("  Simulated: {:.2}s", ctx.sim_time());
    info!("  Wall clock: {:.2?}", elapsed);
    info!("  Blocks: {}", ctx.world.blocks().len());
    info!("  Drops: {}", ctx.world.drops().len());

    app.cleanup(ctx);
    info!("Cleanup complete");
}
