//! Scripted demo application.

use glam::Vec2;
use tracing::{debug, info};

use sandlot_app::{AppContext, FrameContext, SandboxApp};
use sandlot_core::GameMode;
use sandlot_input::{InputBinding, Key, MouseButton};
use sandlot_world::{TerrainGenerator, WorldEvent};

/// Log a status line every this many ticks.
const STATUS_INTERVAL: u64 = 60;

/// Terrain starts this many columns left of the spawn column.
const TERRAIN_MARGIN: i32 = 10;

/// Demo parameters (from CLI or defaults).
#[derive(Debug, Clone)]
pub struct DemoParams {
    pub ticks: u64,
    pub seed: u64,
    pub creative: bool,
    /// Terrain columns to generate, 0 for the starter scene only
    pub terrain: i32,
    pub realtime: bool,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            ticks: 600,
            seed: 42,
            creative: false,
            terrain: 0,
            realtime: false,
        }
    }
}

impl DemoParams {
    /// Parse demo parameters from command line arguments.
    pub fn from_args() -> Self {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse from an argument list; unknown or malformed flags are ignored.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut params = Self::default();
        let args: Vec<String> = args.into_iter().collect();

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match args[i].as_str() {
                "--ticks" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.ticks = v;
                        i += 1;
                    }
                }
                "--seed" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.seed = v;
                        i += 1;
                    }
                }
                "--terrain" => {
                    if let Some(v) = value.and_then(|v| v.parse().ok()) {
                        params.terrain = v;
                        i += 1;
                    }
                }
                "--creative" => params.creative = true,
                "--realtime" => params.realtime = true,
                _ => {}
            }
            i += 1;
        }

        params
    }
}

/// One scripted input.
#[derive(Debug, Clone, Copy)]
enum Cue {
    /// Hold a binding for a number of ticks.
    Hold(InputBinding, u64),
    /// Hold a binding with the cursor at an offset from the player.
    Aim(MouseButton, Vec2, u64),
    /// Scroll the wheel once.
    Scroll(f32),
}

/// The demo script: (start tick, cue).
const SCRIPT: &[(u64, Cue)] = &[
    (0, Cue::Hold(InputBinding::Key(Key::D), 45)),
    (50, Cue::Hold(InputBinding::Key(Key::Space), 10)),
    (90, Cue::Hold(InputBinding::Key(Key::A), 30)),
    // Dig the block under the player's feet, then refill it
    (150, Cue::Aim(MouseButton::Left, Vec2::new(16.0, 48.0), 1)),
    (160, Cue::Aim(MouseButton::Right, Vec2::new(16.0, 48.0), 1)),
    // Build a short wall to the right
    (180, Cue::Aim(MouseButton::Right, Vec2::new(80.0, 16.0), 1)),
    (182, Cue::Aim(MouseButton::Right, Vec2::new(80.0, -16.0), 1)),
    (200, Cue::Scroll(-1.0)),
    (210, Cue::Hold(InputBinding::Key(Key::Digit(2)), 1)),
    (220, Cue::Aim(MouseButton::Middle, Vec2::new(80.0, 16.0), 1)),
    (240, Cue::Hold(InputBinding::Key(Key::G), 1)),
    (250, Cue::Hold(InputBinding::Key(Key::D), 60)),
    (320, Cue::Hold(InputBinding::Key(Key::G), 1)),
];

/// Scripted demo state.
pub struct Demo {
    blocks_placed: u32,
    blocks_removed: u32,
    items_collected: u32,
    deaths: u32,
    damage: u32,
}

impl SandboxApp for Demo {
    #[allow(clippy::cast_possible_truncation)]
    fn init(ctx: &mut AppContext) -> anyhow::Result<Self> {
        let params = DemoParams::from_args();

        if params.creative {
            ctx.world.set_mode(GameMode::Creative);
        }

        if params.terrain > 0 {
            let generator = TerrainGenerator::with_seed(params.seed);
            let grid = ctx.world.config().grid_size;
            let spawn_column = (ctx.world.player().position().x / grid).floor() as i32;
            let start = spawn_column - TERRAIN_MARGIN;
            let added = ctx
                .world
                .generate_terrain(&generator, start..start + params.terrain);
            info!(columns = params.terrain, added, "Terrain added");
        }

        info!(
            blocks = ctx.world.blocks().len(),
            mode = ?ctx.world.mode(),
            "Demo ready"
        );

        Ok(Self {
            blocks_placed: 0,
            blocks_removed: 0,
            items_collected: 0,
            deaths: 0,
            damage: 0,
        })
    }

    fn input(&mut self, ctx: &mut AppContext) {
        let tick = ctx.tick_count;
        let player = ctx.world.player().position();

        for &(start, cue) in SCRIPT {
            match cue {
                Cue::Hold(binding, len) => {
                    if tick == start {
                        ctx.input.press(binding);
                    } else if tick == start + len {
                        ctx.input.release(binding);
                    }
                }
                Cue::Aim(button, offset, len) => {
                    if tick == start {
                        ctx.set_cursor_world(player + offset);
                        ctx.input.press(button);
                    } else if tick == start + len {
                        ctx.input.release(button);
                    }
                }
                Cue::Scroll(delta) => {
                    if tick == start {
                        ctx.input.scroll(delta);
                    }
                }
            }
        }
    }

    fn update(&mut self, _ctx: &AppContext, frame: &FrameContext) {
        for event in &frame.report.events {
            debug!(tick = frame.frame_number, ?event, "World event");
            match event {
                WorldEvent::BlockPlaced { .. } => self.blocks_placed += 1,
                WorldEvent::BlockRemoved { .. } => self.blocks_removed += 1,
                WorldEvent::DropPickedUp { count, .. } => self.items_collected += count,
                WorldEvent::PlayerDamaged { amount, .. } => self.damage += amount,
                WorldEvent::PlayerDied => self.deaths += 1,
                _ => {}
            }
        }
    }

    fn render(&mut self, ctx: &AppContext, frame: &FrameContext) -> anyhow::Result<()> {
        if frame.frame_number % STATUS_INTERVAL == 0 {
            let player = ctx.world.player();
            let selected = ctx
                .world
                .inventory()
                .selected_item()
                .and_then(|stack| stack.item())
                .map_or("-", |kind| kind.name.as_str());
            info!(
                "t={:.1}s pos=({:.0}, {:.0}) hp={}/{} ground={} slot={} [{}] drops={} camera=({:.0}, {:.0})",
                ctx.sim_time(),
                player.position().x,
                player.position().y,
                player.health.current(),
                player.health.max(),
                player.on_ground(),
                ctx.world.inventory().selected_slot(),
                selected,
                ctx.world.drops().len(),
                ctx.camera.position.x,
                ctx.camera.position.y,
            );
        }
        Ok(())
    }

    fn cleanup(&mut self, _ctx: &mut AppContext) {
        info!("Demo summary:");
        info!("  Blocks placed: {}", self.blocks_placed);
        info!("  Blocks removed: {}", self.blocks_removed);
        info!("  Items collected: {}", self.items_collected);
        info!("  Damage taken: {}", self.damage);
        info!("  Deaths: {}", self.deaths);
    }
}
