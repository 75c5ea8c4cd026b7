//! Axis-aligned box geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in world units.
///
/// `x`/`y` is the top-left corner; Y grows downward, so a positive vertical
/// velocity means falling. The box is owned by whichever entity embeds it
/// and must be re-synchronized explicitly after every position change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Horizontal extent
    pub width: f32,
    /// Vertical extent
    pub height: f32,
}

impl Aabb {
    /// Create a new box from its top-left corner and size
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a box at `position` with the given size
    #[inline]
    #[must_use]
    pub const fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Create a square box with edge length `size` at `position`
    #[inline]
    #[must_use]
    pub const fn square(position: Vec2, size: f32) -> Self {
        Self::new(position.x, position.y, size, size)
    }

    /// Top-left corner
    #[inline]
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    #[must_use]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Get the size of the box
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Get the center of the box
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Move the box so its top-left corner sits at `position`
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Check if a point is inside the box, edges included
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.x <= point.x
            && point.x <= self.x + self.width
            && self.y <= point.y
            && point.y <= self.y + self.height
    }

    /// Check if this box overlaps another.
    ///
    /// The test is strict on both axes: boxes that only share an edge do not
    /// intersect, which lets grid-aligned blocks sit side by side.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Signed minimum translation needed to push `self` out of `other`.
    ///
    /// Each axis picks the smaller of the two edge overlaps; a negative
    /// component pushes left (or up), a positive one right (or down).
    /// Returns [`Vec2::ZERO`] when the boxes do not intersect.
    #[must_use]
    pub fn penetration_depth(&self, other: &Self) -> Vec2 {
        if !self.intersects(other) {
            return Vec2::ZERO;
        }

        let push_left = (self.x + self.width) - other.x;
        let push_right = (other.x + other.width) - self.x;
        let dx = if push_left < push_right {
            -push_left
        } else {
            push_right
        };

        let push_up = (self.y + self.height) - other.y;
        let push_down = (other.y + other.height) - self.y;
        let dy = if push_up < push_down {
            -push_up
        } else {
            push_down
        };

        Vec2::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(15.0, 15.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn penetration_pushes_toward_nearest_edge() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let depth = a.penetration_depth(&b);
        assert_relative_eq!(depth.x, -5.0);
        assert_relative_eq!(depth.y, -5.0);

        // From the other side the push is positive
        let depth = b.penetration_depth(&a);
        assert_relative_eq!(depth.x, 5.0);
        assert_relative_eq!(depth.y, 5.0);
    }

    #[test]
    fn penetration_is_zero_without_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);

        // Overlaps on X only
        let b = Aabb::new(5.0, 20.0, 10.0, 10.0);
        assert_eq!(a.penetration_depth(&b), Vec2::ZERO);

        // Shares an edge
        let c = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.penetration_depth(&c), Vec2::ZERO);
    }

    #[test]
    fn shallow_landing_resolves_upward() {
        // A 32px mover sunk 2px into the top of a block
        let mover = Aabb::new(0.0, 2.0, 32.0, 32.0);
        let block = Aabb::new(0.0, 32.0, 32.0, 32.0);
        let depth = mover.penetration_depth(&block);
        assert_relative_eq!(depth.y, -2.0);
        assert!(depth.x.abs() > depth.y.abs());
    }

    #[test]
    fn contains_point_includes_edges() {
        let aabb = Aabb::new(32.0, 32.0, 32.0, 32.0);
        assert!(aabb.contains_point(Vec2::new(32.0, 32.0)));
        assert!(aabb.contains_point(Vec2::new(64.0, 64.0)));
        assert!(aabb.contains_point(Vec2::new(40.0, 50.0)));
        assert!(!aabb.contains_point(Vec2::new(65.0, 40.0)));
    }

    #[test]
    fn center_and_size() {
        let aabb = Aabb::square(Vec2::new(8.0, 8.0), 16.0);
        assert_eq!(aabb.center(), Vec2::new(16.0, 16.0));
        assert_eq!(aabb.size(), Vec2::splat(16.0));
        assert_eq!(aabb.max(), Vec2::splat(24.0));
    }
}
