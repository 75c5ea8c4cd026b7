//! Procedural terrain generation.

use std::ops::Range;

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use sandlot_core::{BlockKind, GridPos};
use sandlot_entity::Block;

use crate::WorldSeed;

/// Terrain generator configuration.
///
/// Rows grow downwards, so a taller surface has a smaller row index.
#[derive(Debug, Clone)]
pub struct TerrainConfig {
    /// Seed for noise generation.
    pub seed: WorldSeed,
    /// Row of the lowest possible surface.
    pub surface_row: i32,
    /// Horizontal scale of terrain features, in cells.
    pub terrain_scale: f64,
    /// Maximum surface height variation, in cells.
    pub terrain_height: f64,
    /// Number of noise octaves for detail.
    pub octaves: usize,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Rows of dirt below the ground cell.
    pub dirt_depth: u32,
    /// Total rows generated per column, surface included.
    pub depth: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            surface_row: 24,
            terrain_scale: 24.0,
            terrain_height: 8.0,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            dirt_depth: 3,
            depth: 8,
        }
    }
}

/// Procedural terrain generator using fractal noise.
pub struct TerrainGenerator {
    config: TerrainConfig,
    height_noise: Fbm<Perlin>,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given configuration.
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: TerrainConfig) -> Self {
        let height_noise = Fbm::<Perlin>::new(config.seed as u32)
            .set_octaves(config.octaves)
            .set_lacunarity(config.lacunarity)
            .set_persistence(config.persistence);

        Self {
            config,
            height_noise,
        }
    }

    /// Create a terrain generator with default configuration.
    pub fn with_seed(seed: WorldSeed) -> Self {
        Self::new(TerrainConfig {
            seed,
            ..Default::default()
        })
    }

    /// Get the terrain configuration.
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Surface row of `column`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn height_at(&self, column: i32) -> i32 {
        let nx = f64::from(column) / self.config.terrain_scale;

        // Noise returns [-1, 1], map to [0, terrain_height] rows above surface_row
        let noise_value = self.height_noise.get([nx, 0.37]).clamp(-1.0, 1.0);
        let lift = ((noise_value + 1.0) * 0.5 * self.config.terrain_height) as i32;
        self.config.surface_row - lift
    }

    /// Kind of block `depth` rows below the surface.
    fn block_at_depth(&self, depth: u32) -> BlockKind {
        if depth == 0 {
            BlockKind::Ground
        } else if depth <= self.config.dirt_depth {
            BlockKind::Dirt
        } else {
            BlockKind::Stone
        }
    }

    /// Generate the blocks of every column in `columns`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn generate(&self, columns: Range<i32>, grid_size: f32) -> Vec<Block> {
        let mut blocks = Vec::new();

        for column in columns {
            let surface = self.height_at(column);
            for depth in 0..self.config.depth {
                let cell = GridPos::new(column, surface + depth as i32);
                blocks.push(Block::at_cell(self.block_at_depth(depth), cell, grid_size));
            }
        }

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_deterministic() {
        let gen1 = TerrainGenerator::with_seed(12345);
        let gen2 = TerrainGenerator::with_seed(12345);

        for x in -200..200 {
            assert_eq!(gen1.height_at(x), gen2.height_at(x));
        }
        assert_eq!(gen1.generate(0..16, 32.0), gen2.generate(0..16, 32.0));
    }

    #[test]
    fn different_seeds_different_terrain() {
        let gen1 = TerrainGenerator::with_seed(12345);
        let gen2 = TerrainGenerator::with_seed(54321);

        let differences = (0..200)
            .filter(|&x| gen1.height_at(x) != gen2.height_at(x))
            .count();
        assert!(differences > 20, "Seeds should produce different terrain");
    }

    #[test]
    fn surface_stays_in_band() {
        let gen = TerrainGenerator::with_seed(7);
        let config = gen.config().clone();
        for x in -500..500 {
            let row = gen.height_at(x);
            assert!(row <= config.surface_row);
            assert!(row >= config.surface_row - config.terrain_height as i32);
        }
    }

    #[test]
    fn columns_are_layered() {
        let gen = TerrainGenerator::with_seed(42);
        let blocks = gen.generate(3..4, 32.0);
        let kinds: Vec<_> = blocks.iter().map(Block::kind).collect();

        assert_eq!(
            kinds,
            [
                BlockKind::Ground,
                BlockKind::Dirt,
                BlockKind::Dirt,
                BlockKind::Dirt,
                BlockKind::Stone,
                BlockKind::Stone,
                BlockKind::Stone,
                BlockKind::Stone,
            ]
        );

        let top = blocks[0].cell(32.0);
        assert_eq!(top, GridPos::new(3, gen.height_at(3)));
        assert_eq!(blocks[7].cell(32.0), GridPos::new(3, top.y + 7));
    }
}
