//! Geometry primitives for field collision queries.
//!
//! - [`Polygon`]: closed boundary with edge-crossing, containment, nearest-point
//!   and corner-node generation
//! - [`Circle`]: disc footprint
//! - [`Shape`]: the two tests the field map runs against any swept shape
//!
//! All types are plain values; nothing here owns shared state.

mod aabb;
mod circle;
mod polygon;

pub use aabb::Aabb;
pub use circle::Circle;
pub use polygon::{Polygon, closest_point_on_segment, segments_intersect};

use crate::core::Point2D;

/// A region that can be tested against the field bounds and obstacles.
///
/// Implemented by every shape the field map sweeps (capsule rectangles,
/// end-cap circles, node clearance circles), so one `shape_intersects`
/// covers them all.
pub trait Shape {
    /// True if any part of the shape leaves `[0, bounds.x] x [0, bounds.y]`.
    fn outside_bounds(&self, bounds: Point2D) -> bool;

    /// True if the shape overlaps the obstacle polygon.
    fn intersects_polygon(&self, polygon: &Polygon) -> bool;
}

impl Shape for Polygon {
    #[inline]
    fn outside_bounds(&self, bounds: Point2D) -> bool {
        Polygon::outside_bounds(self, bounds)
    }

    #[inline]
    fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.intersects(polygon)
    }
}

impl Shape for Circle {
    #[inline]
    fn outside_bounds(&self, bounds: Point2D) -> bool {
        Circle::outside_bounds(self, bounds)
    }

    #[inline]
    fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        self.intersects(polygon)
    }
}
