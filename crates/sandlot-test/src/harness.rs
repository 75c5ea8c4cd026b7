//! Scenario harness and ASCII rendering for world tests.
//!
//! A [`Scenario`] builds a world, drives it with scripted [`TickInput`]s and
//! keeps every [`TickReport`]. An [`AsciiRenderer`] draws a window of the
//! world one character per grid cell so whole scenes can be compared as
//! text with `insta` inline snapshots.

use glam::Vec2;
use sandlot_core::{Aabb, BlockKind, GameConfig, GameMode, GridPos};
use sandlot_entity::Block;
use sandlot_input::TickInput;
use sandlot_inventory::Item;
use sandlot_world::{TickReport, World, WorldEvent};

use crate::Result;

/// Character for an empty cell.
pub const EMPTY: char = '.';
/// Character for the player.
pub const PLAYER: char = '@';
/// Character for an item drop.
pub const DROP: char = '*';

/// Scripted world run.
pub struct Scenario {
    world: World,
    reports: Vec<TickReport>,
}

impl Scenario {
    /// A scenario over an empty world.
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            world: World::new(config)?,
            reports: Vec::new(),
        })
    }

    /// Empty world with default configuration.
    pub fn empty() -> Result<Self> {
        Self::new(GameConfig::default())
    }

    /// The starter scene with default configuration.
    pub fn starter() -> Result<Self> {
        Ok(Self {
            world: World::starter(GameConfig::default())?,
            reports: Vec::new(),
        })
    }

    /// Add blocks of `kind` at each of `cells`.
    #[must_use]
    pub fn with_blocks(
        mut self,
        kind: BlockKind,
        cells: impl IntoIterator<Item = GridPos>,
    ) -> Self {
        for cell in cells {
            self.world.insert_block(kind, cell);
        }
        self
    }

    /// Add a horizontal row of blocks from column `from` to `to` (exclusive).
    #[must_use]
    pub fn with_floor(self, kind: BlockKind, row: i32, from: i32, to: i32) -> Self {
        self.with_blocks(kind, (from..to).map(|x| GridPos::new(x, row)))
    }

    /// Move the player, zeroing its velocity.
    #[must_use]
    pub fn with_player_at(mut self, position: Vec2) -> Self {
        self.world.player_mut().body.teleport(position);
        self
    }

    /// Put the player's top-left corner on a cell origin.
    #[must_use]
    pub fn with_player_in(self, cell: GridPos) -> Self {
        let origin = cell.origin(self.world.config().grid_size);
        self.with_player_at(origin)
    }

    /// Give the player items.
    #[must_use]
    pub fn with_item(mut self, kind: BlockKind, count: u32) -> Self {
        self.world.inventory_mut().add_item(Item::block(kind, count));
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.world.set_mode(mode);
        self
    }

    /// Run one tick.
    pub fn tick(&mut self, input: &TickInput) -> &TickReport {
        let dt = self.world.config().tick_dt();
        let report = self.world.update(dt, input);
        self.reports.push(report);
        &self.reports[self.reports.len() - 1]
    }

    /// Run `ticks` ticks with the same input.
    pub fn hold(&mut self, input: &TickInput, ticks: usize) -> &mut Self {
        for _ in 0..ticks {
            self.tick(input);
        }
        self
    }

    /// Run `ticks` ticks with no input.
    pub fn idle(&mut self, ticks: usize) -> &mut Self {
        self.hold(&TickInput::default(), ticks)
    }

    /// Run until `done` returns true, at most `limit` ticks. Returns the
    /// number of ticks run, or `None` if the limit was hit.
    pub fn run_until(
        &mut self,
        input: &TickInput,
        limit: usize,
        mut done: impl FnMut(&World) -> bool,
    ) -> Option<usize> {
        for n in 1..=limit {
            self.tick(input);
            if done(&self.world) {
                return Some(n);
            }
        }
        None
    }

    #[must_use]
    pub const fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Every report so far, oldest first.
    #[must_use]
    pub fn reports(&self) -> &[TickReport] {
        &self.reports
    }

    /// Every event so far, in order.
    pub fn events(&self) -> impl Iterator<Item = &WorldEvent> {
        self.reports.iter().flat_map(|report| report.events.iter())
    }

    /// Total damage the player has taken.
    #[must_use]
    pub fn damage_taken(&self) -> u32 {
        self.reports.iter().map(TickReport::damage_taken).sum()
    }

    /// Render with `renderer`.
    #[must_use]
    pub fn render(&self, renderer: &AsciiRenderer) -> String {
        renderer.render(&self.world)
    }
}

/// Draws a rectangle of the world, one character per grid cell.
///
/// Each cell is sampled at its centre: the player wins over drops, drops
/// over blocks. A drop is drawn in the cell holding its top-left corner.
#[derive(Debug, Clone, Copy)]
pub struct AsciiRenderer {
    /// Top-left cell of the window.
    pub origin: GridPos,
    pub columns: u32,
    pub rows: u32,
}

impl AsciiRenderer {
    #[must_use]
    pub const fn new(origin: GridPos, columns: u32, rows: u32) -> Self {
        Self {
            origin,
            columns,
            rows,
        }
    }

    /// Render the window as newline-separated rows, no trailing newline.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn render(&self, world: &World) -> String {
        let grid = world.config().grid_size;
        let player = world.player().body.aabb;
        let mut out = String::new();

        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            for column in 0..self.columns {
                let cell = GridPos::new(self.origin.x + column as i32, self.origin.y + row as i32);
                out.push(cell_glyph(world, &player, cell, grid));
            }
        }

        out
    }

    /// World rectangle covered by the window.
    #[must_use]
    pub fn view(&self, grid_size: f32) -> Aabb {
        Aabb::from_position_size(
            self.origin.origin(grid_size),
            Vec2::new(self.columns as f32, self.rows as f32) * grid_size,
        )
    }
}

fn cell_glyph(world: &World, player: &Aabb, cell: GridPos, grid: f32) -> char {
    let centre = cell.center(grid);
    if player.contains_point(centre) {
        return PLAYER;
    }
    if world
        .drops()
        .iter()
        .any(|drop| GridPos::from_world(drop.position(), grid) == cell)
    {
        return DROP;
    }
    world
        .blocks()
        .iter()
        .find(|block| block.contains_point(centre))
        .map_or(EMPTY, |block: &Block| block.kind().glyph())
}
