//! Grid coordinates for block placement.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cell position on the block grid.
///
/// Cell `(x, y)` covers world space `[x * grid, (x + 1) * grid)` on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    /// Create a new grid position
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell containing a world-space point (floor division, so negative
    /// coordinates snap toward negative infinity)
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_world(point: Vec2, grid_size: f32) -> Self {
        Self {
            x: (point.x / grid_size).floor() as i32,
            y: (point.y / grid_size).floor() as i32,
        }
    }

    /// World-space top-left corner of the cell
    #[inline]
    #[must_use]
    pub fn origin(self, grid_size: f32) -> Vec2 {
        Vec2::new(self.x as f32 * grid_size, self.y as f32 * grid_size)
    }

    /// World-space center of the cell
    #[inline]
    #[must_use]
    pub fn center(self, grid_size: f32) -> Vec2 {
        self.origin(grid_size) + Vec2::splat(grid_size * 0.5)
    }
}

/// Snap a world-space point to the origin of its grid cell.
#[inline]
#[must_use]
pub fn snap_to_grid(point: Vec2, grid_size: f32) -> Vec2 {
    GridPos::from_world(point, grid_size).origin(grid_size)
}
