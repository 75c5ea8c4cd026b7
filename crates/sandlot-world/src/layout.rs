//! The starter scene: a scatter of floating blocks and a stocked inventory.

use std::ops::Range;

use glam::Vec2;
use sandlot_core::{BlockKind, GameConfig, Result};
use sandlot_entity::Block;
use sandlot_inventory::Item;
use tracing::info;

use crate::generation::TerrainGenerator;
use crate::World;

/// Top-left corners of the starter blocks.
const STARTER_POSITIONS: [(f32, f32); 17] = [
    (192.0, 192.0),
    (384.0, 288.0),
    (96.0, 384.0),
    (288.0, 128.0),
    (480.0, 224.0),
    (192.0, 576.0),
    (224.0, 640.0),
    (288.0, 672.0),
    (384.0, 96.0),
    (480.0, 192.0),
    (576.0, 288.0),
    (128.0, 672.0),
    (288.0, 768.0),
    (416.0, 864.0),
    (96.0, 448.0),
    (192.0, 480.0),
    (320.0, 512.0),
];

/// The starter blocks, one grid cell each.
#[must_use]
pub fn starter_blocks(grid_size: f32) -> Vec<Block> {
    STARTER_POSITIONS
        .iter()
        .map(|&(x, y)| {
            Block::new(
                BlockKind::SmallBlock,
                Vec2::new(x, y),
                Vec2::splat(grid_size),
            )
        })
        .collect()
}

/// The starting inventory, in insertion order.
#[must_use]
pub fn starter_items() -> Vec<Item> {
    vec![
        Item::block(BlockKind::Stone, 64),
        Item::block(BlockKind::Dirt, 32),
        Item::block(BlockKind::Wood, 16),
        Item::block(BlockKind::SmallBlock, 10),
        Item::block(BlockKind::RedBlock, 10),
        Item::block(BlockKind::BlueBlock, 10),
        Item::block(BlockKind::GreenBlock, 10),
    ]
}

impl World {
    /// A world with the starter blocks and starting inventory.
    pub fn starter(config: GameConfig) -> Result<Self> {
        let mut world = Self::new(config)?;
        world.extend_blocks(starter_blocks(world.config.grid_size));
        for item in starter_items() {
            world.inventory.add_item(item);
        }
        info!(blocks = world.blocks.len(), "Starter scene ready");
        Ok(world)
    }

    /// Add generated terrain over `columns`, skipping occupied cells.
    pub fn generate_terrain(&mut self, generator: &TerrainGenerator, columns: Range<i32>) -> usize {
        let added = self.extend_blocks(generator.generate(columns, self.config.grid_size));
        info!(added, seed = generator.config().seed, "Terrain generated");
        added
    }
}
