//! Closed polygon with exact edge-crossing and containment predicates.
//!
//! Edges are implicit between consecutive vertices, with the last vertex
//! closing back to the first. Polygons need not be convex; every predicate
//! here works on arbitrary simple polygons.
//!
//! # Touching
//!
//! Collision predicates are conservative: two polygons that merely share a
//! point (a vertex on an edge, collinear overlapping edges) intersect.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::core::Point2D;
use crate::error::{DrishtiError, Result};

/// Smallest `sin(corner/2)` used when pushing a node off a corner.
///
/// Caps the offset of very sharp corners at 10x the clearance radius, the
/// same way an SVG miter limit caps a stroke join.
const MIN_SIN_HALF_ANGLE: f32 = 0.1;

/// A closed polygon of at least three vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Polygon {
    vertices: Vec<Point2D>,
    aabb: Aabb,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than three or non-finite vertices.
    pub fn new(vertices: Vec<Point2D>) -> Result<Self> {
        if vertices.len() < 3 || !vertices.iter().all(Point2D::is_finite) {
            return Err(DrishtiError::InvalidPolygon {
                context: "polygon".to_string(),
                vertices: vertices.len(),
            });
        }
        Ok(Self::from_vertices(vertices))
    }

    /// Four-vertex polygon in the given order (always valid).
    pub fn quad(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> Self {
        Self::from_vertices(vec![a, b, c, d])
    }

    /// Axis-aligned rectangle spanning `min`..`max`, counter-clockwise.
    pub fn rectangle(min: Point2D, max: Point2D) -> Self {
        Self::quad(
            min,
            Point2D::new(max.x, min.y),
            max,
            Point2D::new(min.x, max.y),
        )
    }

    fn from_vertices(vertices: Vec<Point2D>) -> Self {
        let aabb = Aabb::from_points(&vertices);
        Self { vertices, aabb }
    }

    /// Vertices in order.
    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Number of vertices (and edges).
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Bounding box of the vertices.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Iterate edges as `(start, end)`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Point-in-polygon by ray casting (crossing number, +X ray).
    ///
    /// Points exactly on an edge may report either side; callers that need
    /// boundary contact also run an edge test.
    pub fn contains(&self, point: Point2D) -> bool {
        if !self.aabb.contains(point) {
            return false;
        }

        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y) {
                let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// True if any edges cross, or either polygon has a vertex inside the other.
    ///
    /// The containment half covers one polygon sitting wholly inside the other
    /// with no edge crossings.
    pub fn intersects(&self, other: &Polygon) -> bool {
        if !self.aabb.intersects(&other.aabb) {
            return false;
        }

        for (a1, a2) in self.edges() {
            for (b1, b2) in other.edges() {
                if segments_intersect(a1, a2, b1, b2) {
                    return true;
                }
            }
        }

        self.vertices.iter().any(|&v| other.contains(v))
            || other.vertices.iter().any(|&v| self.contains(v))
    }

    /// True if any vertex lies outside the rectangle `[0, bounds.x] x [0, bounds.y]`.
    pub fn outside_bounds(&self, bounds: Point2D) -> bool {
        self.vertices
            .iter()
            .any(|v| v.x < 0.0 || v.x > bounds.x || v.y < 0.0 || v.y > bounds.y)
    }

    /// Nearest point on the polygon boundary to `point`.
    pub fn closest_point(&self, point: Point2D) -> Point2D {
        let mut best = self.vertices[0];
        let mut best_dist_sq = f32::INFINITY;

        for (a, b) in self.edges() {
            let candidate = closest_point_on_segment(point, a, b);
            let dist_sq = candidate.distance_squared_to(point);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = candidate;
            }
        }
        best
    }

    /// One clearance waypoint per vertex, pushed off the corner.
    ///
    /// Each candidate lies on the bisector of the corner's two edge
    /// directions, on the outside of the polygon, at distance `radius` from
    /// both edge lines (the matching vertex of the polygon offset by
    /// `radius`). A straight corner offsets along the edge normal instead.
    ///
    /// ```text
    ///        * candidate
    ///         \
    ///          \ radius / sin(corner / 2)
    ///           \
    ///            +--------
    ///            |  obstacle
    /// ```
    pub fn possible_nodes(&self, radius: f32) -> Vec<Point2D> {
        let n = self.vertices.len();
        let mut nodes = Vec::with_capacity(n);

        for i in 0..n {
            let prev = self.vertices[(i + n - 1) % n];
            let corner = self.vertices[i];
            let next = self.vertices[(i + 1) % n];

            let to_prev = (prev - corner).normalize();
            let to_next = (next - corner).normalize();
            let sum = to_prev + to_next;

            let (direction, reach) = if sum.length_squared() < 1e-12 {
                (to_next.normal(), radius)
            } else {
                let bisector = sum.normalize();
                let sin_half = to_prev.cross(bisector).abs().max(MIN_SIN_HALF_ANGLE);
                (-bisector, radius / sin_half)
            };

            // The bisector opens into the narrower side of the corner, which is
            // the interior for convex corners and the exterior for reflex ones.
            let candidate = corner + direction * reach;
            if self.contains(candidate) {
                nodes.push(corner - direction * reach);
            } else {
                nodes.push(candidate);
            }
        }
        nodes
    }

    /// Mirror every vertex across the vertical line `x = axis`.
    ///
    /// Vertex order is preserved. Flipping twice about the same axis returns
    /// the original vertices exactly when the axis and coordinates are
    /// representable in binary, as quarter-inch values are; otherwise the
    /// result matches to within rounding.
    pub fn flip_x(&self, axis: f32) -> Polygon {
        Self::from_vertices(self.vertices.iter().map(|v| v.flip_x(axis)).collect())
    }

    /// Mirror every vertex across the horizontal line `y = axis`.
    pub fn flip_y(&self, axis: f32) -> Polygon {
        Self::from_vertices(self.vertices.iter().map(|v| v.flip_y(axis)).collect())
    }
}

impl TryFrom<Vec<Point2D>> for Polygon {
    type Error = DrishtiError;

    fn try_from(vertices: Vec<Point2D>) -> Result<Self> {
        Polygon::new(vertices)
    }
}

impl From<Polygon> for Vec<Point2D> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

/// Projection of `point` onto segment `a`-`b`, clamped to the endpoints.
pub fn closest_point_on_segment(point: Point2D, a: Point2D, b: Point2D) -> Point2D {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Orientation of `c` relative to the directed line `a`->`b` (positive = left).
#[inline]
fn orient(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    (b - a).cross(c - a)
}

/// `p` is within the bounding box of segment `a`-`b` (assumes collinear).
#[inline]
fn on_segment(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segment intersection including touching and collinear overlap.
pub fn segments_intersect(p1: Point2D, p2: Point2D, q1: Point2D, q2: Point2D) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, q2, p1))
        || (d2 == 0.0 && on_segment(q1, q2, p2))
        || (d3 == 0.0 && on_segment(p1, p2, q1))
        || (d4 == 0.0 && on_segment(p1, p2, q2))
}
