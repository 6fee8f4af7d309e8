//! Axis-aligned collision detection between the runner and the obstacle
//!
//! Both sprites move under CSS control, so their geometry is re-queried
//! from the rendering surface every tick instead of being simulated here.
//! The `GeometryProvider` trait is that seam: the wasm driver backs it
//! with live `getBoundingClientRect` boxes, tests back it with synthetic
//! boxes.

use glam::Vec2;

/// An axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from edge coordinates (left, top, right, bottom)
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            min: Vec2::new(left, top),
            max: Vec2::new(right, bottom),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Separating-axis overlap test. Boxes that merely touch along an
    /// edge still count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y)
    }
}

/// Capability interface for reading live sprite geometry
///
/// Either box may be absent when the backing element is detached; the
/// caller treats that as "no collision" and winds the loop down rather
/// than spinning on stale geometry.
pub trait GeometryProvider {
    fn runner_box(&self) -> Option<Aabb>;
    fn obstacle_box(&self) -> Option<Aabb>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_intersecting() {
        let a = Aabb::from_edges(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_edges(5.0, 5.0, 15.0, 15.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Aabb::from_edges(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::from_edges(40.0, 40.0, 60.0, 60.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_separated_horizontally() {
        let a = Aabb::from_edges(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_edges(10.1, 0.0, 20.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_separated_vertically() {
        // Runner mid-jump: same horizontal span, cleared the obstacle
        let runner = Aabb::from_edges(100.0, 0.0, 150.0, 50.0);
        let obstacle = Aabb::from_edges(100.0, 60.0, 150.0, 110.0);
        assert!(!runner.overlaps(&obstacle));
    }

    #[test]
    fn test_edge_contact_counts_as_hit() {
        let a = Aabb::from_edges(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_edges(10.0, 0.0, 20.0, 10.0);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_dimensions() {
        let a = Aabb::from_edges(2.0, 3.0, 12.0, 8.0);
        assert_eq!(a.width(), 10.0);
        assert_eq!(a.height(), 5.0);
    }
}
