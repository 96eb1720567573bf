//! Axis-aligned box used to reject far-apart shapes before exact tests.

use crate::core::Point2D;

/// Axis-aligned bounding box of a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Lower-left corner.
    pub min: Point2D,
    /// Upper-right corner.
    pub max: Point2D,
}

impl Aabb {
    /// Tightest box around `points`. An empty slice gives an inverted box
    /// that contains and intersects nothing.
    pub fn from_points(points: &[Point2D]) -> Self {
        let inverted = Self {
            min: Point2D::new(f32::INFINITY, f32::INFINITY),
            max: Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        };
        points.iter().fold(inverted, |aabb, &p| Self {
            min: aabb.min.min(p),
            max: aabb.max.max(p),
        })
    }

    /// Grow by `margin` on every side.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        let pad = Point2D::new(margin, margin);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Point inside or on the edge.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Boxes overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
