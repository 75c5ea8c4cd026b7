//! Static grid blocks.

use glam::Vec2;
use sandlot_core::{Aabb, BlockKind, Color, GridPos};
use sandlot_physics::Collider;

/// A static obstacle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    kind: BlockKind,
    position: Vec2,
    aabb: Aabb,
}

impl Block {
    /// Block of `kind` with its top-left corner at `position`
    #[must_use]
    pub const fn new(kind: BlockKind, position: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            position,
            aabb: Aabb::from_position_size(position, size),
        }
    }

    /// Block filling one grid cell
    #[must_use]
    pub fn at_cell(kind: BlockKind, cell: GridPos, grid_size: f32) -> Self {
        Self::new(kind, cell.origin(grid_size), Vec2::splat(grid_size))
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.kind.color()
    }

    /// Move the block, keeping its box in sync
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.aabb.set_position(position);
    }

    /// Grid cell holding the block's top-left corner
    #[must_use]
    pub fn cell(&self, grid_size: f32) -> GridPos {
        GridPos::from_world(self.position, grid_size)
    }

    /// Whether the block sits exactly at `origin`
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_at(&self, origin: Vec2) -> bool {
        self.position == origin
    }

    /// Whether a world-space point lies on the block, edges included
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.aabb.contains_point(point)
    }
}

impl Collider for Block {
    #[inline]
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}
