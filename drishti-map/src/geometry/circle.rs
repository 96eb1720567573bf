//! Disc region used for the robot footprint and node clearance checks.

use serde::{Deserialize, Serialize};

use super::polygon::Polygon;
use crate::core::Point2D;

/// A filled circle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point2D,
    /// Radius, never negative.
    pub radius: f32,
}

impl Circle {
    /// Create a circle; a negative radius is clamped to zero.
    #[inline]
    pub fn new(center: Point2D, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// True if the disc overlaps the polygon.
    ///
    /// Either the boundary passes strictly closer than `radius` to the
    /// center, or the center is inside the polygon.
    pub fn intersects(&self, polygon: &Polygon) -> bool {
        if !polygon.aabb().expand(self.radius).contains(self.center) {
            return false;
        }

        let nearest = polygon.closest_point(self.center);
        nearest.distance_squared_to(self.center) < self.radius * self.radius
            || polygon.contains(self.center)
    }

    /// True if `center ± radius` leaves `[0, bounds.x] x [0, bounds.y]` on any axis.
    pub fn outside_bounds(&self, bounds: Point2D) -> bool {
        self.center.x - self.radius < 0.0
            || self.center.x + self.radius > bounds.x
            || self.center.y - self.radius < 0.0
            || self.center.y + self.radius > bounds.y
    }
}
