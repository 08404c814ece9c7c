//! Axis-aligned box geometry for contact detection
//!
//! Every collidable in the game is a rectangle: the boat, both logs, and the
//! invisible gap sensor. A box is defined by its center and half-extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in playfield space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec2,
    /// Half-extents (half width, half height)
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from center and full sprite dimensions
    pub fn from_size(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Left edge X
    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    /// Right edge X
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Bottom edge Y
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Top edge Y
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Overlap test. Touching edges do not count as overlap, matching the
    /// begin-contact semantics of the resolver (a zero-area contact never fires).
    pub fn intersects(&self, other: &Aabb) -> bool {
        let d = (other.center - self.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Aabb::from_size(Vec2::new(0.0, 0.0), 40.0, 60.0);
        let b = Aabb::from_size(Vec2::new(30.0, 0.0), 40.0, 60.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_separated_horizontally() {
        let a = Aabb::from_size(Vec2::new(0.0, 0.0), 40.0, 60.0);
        let b = Aabb::from_size(Vec2::new(100.0, 0.0), 40.0, 60.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        // Right edge of a at x=20, left edge of b at x=20
        let a = Aabb::from_size(Vec2::new(0.0, 0.0), 40.0, 40.0);
        let b = Aabb::from_size(Vec2::new(40.0, 0.0), 40.0, 40.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_vertical_separation() {
        // Same column, different heights - a log well above the boat
        let boat = Aabb::from_size(Vec2::new(200.0, 60.0), 40.0, 60.0);
        let log = Aabb::from_size(Vec2::new(200.0, 500.0), 180.0, 40.0);
        assert!(!boat.intersects(&log));
    }

    #[test]
    fn test_edges() {
        let b = Aabb::from_size(Vec2::new(100.0, 50.0), 80.0, 30.0);
        assert_eq!(b.left(), 60.0);
        assert_eq!(b.right(), 140.0);
        assert_eq!(b.bottom(), 35.0);
        assert_eq!(b.top(), 65.0);
    }
}
