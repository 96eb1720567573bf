//! The queryable field model.
//!
//! Built once from a [`FieldLayout`] and a [`DrishtiConfig`], then read-only.
//! Every query takes `&self`, so one map can be shared across threads
//! (`Arc<FieldMap>`) between the control loop and the sensing loop.

use super::landmark::VisionTarget;
use super::layout::FieldLayout;
use super::nodes::NodeSet;
use crate::config::DrishtiConfig;
use crate::core::{Point2D, angle_diff};
use crate::error::Result;
use crate::geometry::{Circle, Polygon, Shape};

/// Field bounds, walls, obstacles and landmarks.
#[derive(Clone, Debug)]
pub struct FieldMap {
    bounds: Point2D,
    boundary: Polygon,
    obstacles: Vec<Polygon>,
    landmarks: Vec<VisionTarget>,
    config: DrishtiConfig,
}

impl FieldMap {
    /// Build a map, applying the layout's symmetry and validating everything.
    pub fn from_layout(layout: &FieldLayout, config: DrishtiConfig) -> Result<Self> {
        config.validate()?;
        let resolved = layout.resolve()?;

        log::info!(
            "Field map {}x{}: {} obstacles, {} landmarks, robot radius {}",
            resolved.bounds.x,
            resolved.bounds.y,
            resolved.obstacles.len(),
            resolved.landmarks.len(),
            config.robot.radius
        );

        Ok(Self {
            bounds: resolved.bounds,
            boundary: resolved.boundary,
            obstacles: resolved.obstacles,
            landmarks: resolved.landmarks,
            config,
        })
    }

    /// Field extent (long axis, short axis).
    #[inline]
    pub fn bounds(&self) -> Point2D {
        self.bounds
    }

    /// Wall polygon.
    #[inline]
    pub fn boundary(&self) -> &Polygon {
        &self.boundary
    }

    /// Obstacle polygons, after symmetry expansion.
    #[inline]
    pub fn obstacles(&self) -> &[Polygon] {
        &self.obstacles
    }

    /// Vision targets, after symmetry expansion.
    #[inline]
    pub fn landmarks(&self) -> &[VisionTarget] {
        &self.landmarks
    }

    /// Parameters the map was built with.
    #[inline]
    pub fn config(&self) -> &DrishtiConfig {
        &self.config
    }

    /// Robot footprint radius.
    #[inline]
    pub fn robot_radius(&self) -> f32 {
        self.config.robot.radius
    }

    /// Can the robot drive straight from `from` to `to` without touching anything?
    ///
    /// The robot is a disc of `robot_radius` swept along the segment: a
    /// rectangle offset by the radius on both sides of the segment, plus a
    /// disc at each end. A zero-length move is always clear.
    ///
    /// ```text
    ///      ___________________________
    ///    ( o-------------------------o )
    ///      ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾
    ///    from                        to
    /// ```
    pub fn line_of_sight(&self, from: Point2D, to: Point2D) -> bool {
        let delta = to - from;
        if delta.length_squared() == 0.0 {
            return true;
        }

        let radius = self.config.robot.radius;
        let offset = delta.normal() * radius;
        let body = Polygon::quad(from + offset, to + offset, to - offset, from - offset);
        if self.shape_intersects(&body) {
            return false;
        }

        !self.shape_intersects(&Circle::new(from, radius))
            && !self.shape_intersects(&Circle::new(to, radius))
    }

    /// True if the shape leaves the field bounds or overlaps any obstacle.
    pub fn shape_intersects<S: Shape>(&self, shape: &S) -> bool {
        if shape.outside_bounds(self.bounds) {
            return true;
        }
        self.obstacles
            .iter()
            .any(|obstacle| shape.intersects_polygon(obstacle))
    }

    /// [`shape_intersects`](Self::shape_intersects) for a polygon.
    #[inline]
    pub fn polygon_intersects(&self, polygon: &Polygon) -> bool {
        self.shape_intersects(polygon)
    }

    /// [`shape_intersects`](Self::shape_intersects) for a circle.
    #[inline]
    pub fn circle_intersects(&self, circle: &Circle) -> bool {
        self.shape_intersects(circle)
    }

    /// Ungated nearest landmark for an image-frame displacement.
    ///
    /// Projects `image_displacement` through each landmark's facing and keeps
    /// the one landing closest to `robot_position`. Always returns the
    /// nearest landmark; `None` only when the map has no landmarks.
    pub fn nearest_target_by_image(
        &self,
        robot_position: Point2D,
        image_displacement: Point2D,
    ) -> Option<&VisionTarget> {
        self.landmarks.iter().min_by(|a, b| {
            let da = a.project(image_displacement).distance_squared_to(robot_position);
            let db = b.project(image_displacement).distance_squared_to(robot_position);
            da.total_cmp(&db)
        })
    }

    /// Gated nearest landmark.
    ///
    /// A landmark qualifies only if its facing is strictly within the angular
    /// gate of `angle_estimate` (compared across the ±π seam) and it lies
    /// strictly inside the distance gate of `position_estimate`. Among
    /// qualifiers, the nearest wins. `None` when nothing qualifies; there is
    /// no fallback to an out-of-gate landmark. A non-finite estimate
    /// qualifies nothing.
    pub fn nearest_target(
        &self,
        position_estimate: Point2D,
        angle_estimate: f32,
    ) -> Option<&VisionTarget> {
        let gate = &self.config.matching;
        let mut best: Option<&VisionTarget> = None;
        let mut best_dist_sq = gate.distance_gate_sq;

        for (i, target) in self.landmarks.iter().enumerate() {
            // Written as acceptance so a NaN error never passes
            let angle_error = angle_diff(angle_estimate, target.angle()).abs();
            if !(angle_error < gate.angular_gate) {
                log::trace!(
                    "landmark {} (facing {:.1}°) rejected: facing off by {:.1}°",
                    i,
                    target.angle_degrees(),
                    angle_error.to_degrees()
                );
                continue;
            }

            let dist_sq = target.position().distance_squared_to(position_estimate);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(target);
            } else {
                log::trace!("landmark {} rejected: distance² {:.1}", i, dist_sq);
            }
        }
        best
    }

    /// Nearest point on the field wall.
    pub fn closest_wall_point(&self, point: Point2D) -> Point2D {
        self.boundary.closest_point(point)
    }

    /// Corner waypoints for a path planner.
    ///
    /// Every obstacle corner yields one candidate at
    /// `robot_radius + nodes.clearance`. A candidate survives only if a disc of
    /// that radius plus `nodes.safety_margin` stays inside the bounds and off
    /// every obstacle, including the one it came from. Survivors are
    /// deduplicated by exact coordinates.
    pub fn generate_nodes(&self) -> NodeSet {
        let radius = self.config.node_radius();
        let check_radius = self.config.node_check_radius();

        let mut nodes = NodeSet::new();
        let mut candidates = 0usize;
        let mut rejected = 0usize;

        for obstacle in &self.obstacles {
            for candidate in obstacle.possible_nodes(radius) {
                candidates += 1;
                if self.shape_intersects(&Circle::new(candidate, check_radius)) {
                    rejected += 1;
                    continue;
                }
                nodes.insert(candidate);
            }
        }

        log::debug!(
            "Node generation: {} candidates, {} rejected, {} kept",
            candidates,
            rejected,
            nodes.len()
        );
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn square_field(robot_radius: f32) -> FieldMap {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_rect_obstacle(Point2D::new(40.0, 40.0), Point2D::new(60.0, 60.0));
        FieldMap::from_layout(&layout, DrishtiConfig::default().with_robot_radius(robot_radius))
            .unwrap()
    }

    #[test]
    fn test_line_of_sight_blocked_through_obstacle() {
        let map = square_field(5.0);
        assert!(!map.line_of_sight(Point2D::new(10.0, 50.0), Point2D::new(90.0, 50.0)));
    }

    #[test]
    fn test_line_of_sight_clear_along_edge() {
        let map = square_field(5.0);
        assert!(map.line_of_sight(Point2D::new(10.0, 10.0), Point2D::new(10.0, 90.0)));
    }

    #[test]
    fn test_line_of_sight_grazing_blocked_by_radius() {
        let map = square_field(5.0);
        // Centerline passes 3 units below the obstacle
        assert!(!map.line_of_sight(Point2D::new(10.0, 37.0), Point2D::new(90.0, 37.0)));
        // 6 units below clears a radius of 5
        assert!(map.line_of_sight(Point2D::new(10.0, 34.0), Point2D::new(90.0, 34.0)));
    }

    #[test]
    fn test_line_of_sight_zero_length() {
        let map = square_field(5.0);
        assert!(map.line_of_sight(Point2D::new(50.0, 50.0), Point2D::new(50.0, 50.0)));
        assert!(map.line_of_sight(Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0)));
    }

    #[test]
    fn test_line_of_sight_end_cap_hits_wall() {
        let map = square_field(5.0);
        // Body stays inside but the end disc pokes out of the field
        assert!(!map.line_of_sight(Point2D::new(10.0, 20.0), Point2D::new(10.0, 97.0)));
    }

    #[test]
    fn test_shape_intersects_outside_bounds() {
        let map = square_field(5.0);
        assert!(map.shape_intersects(&Circle::new(Point2D::new(-50.0, -50.0), 1.0)));
        assert!(!map.shape_intersects(&Circle::new(Point2D::new(20.0, 20.0), 1.0)));
    }

    #[test]
    fn test_per_shape_entry_points() {
        let map = square_field(5.0);
        let inside = Polygon::rectangle(Point2D::new(45.0, 45.0), Point2D::new(50.0, 50.0));
        let clear = Polygon::rectangle(Point2D::new(5.0, 5.0), Point2D::new(10.0, 10.0));
        assert!(map.polygon_intersects(&inside));
        assert!(!map.polygon_intersects(&clear));
        assert!(map.circle_intersects(&Circle::new(Point2D::new(35.0, 50.0), 6.0)));
        assert!(!map.circle_intersects(&Circle::new(Point2D::new(35.0, 50.0), 4.0)));
    }

    #[test]
    fn test_closest_wall_point() {
        let map = square_field(5.0);
        assert_eq!(
            map.closest_wall_point(Point2D::new(3.0, 50.0)),
            Point2D::new(0.0, 50.0)
        );
        assert_eq!(
            map.closest_wall_point(Point2D::new(50.0, 98.0)),
            Point2D::new(50.0, 100.0)
        );
    }

    #[test]
    fn test_generate_nodes_square() {
        let map = square_field(5.0);
        let nodes = map.generate_nodes();
        assert_eq!(nodes.len(), 4);
        for &node in &nodes {
            let check = Circle::new(node, map.config().node_check_radius());
            assert!(!map.shape_intersects(&check));
        }
    }

    #[test]
    fn test_generate_nodes_rejects_near_wall() {
        // Obstacle hugging the wall: its outer corners have no room
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_rect_obstacle(Point2D::new(0.0, 40.0), Point2D::new(20.0, 60.0));
        let map = FieldMap::from_layout(&layout, DrishtiConfig::default().with_robot_radius(5.0))
            .unwrap();
        let nodes = map.generate_nodes();
        assert_eq!(nodes.len(), 2);
        assert!(nodes.iter().all(|n| n.x > 20.0));
    }

    #[test]
    fn test_gated_lookup_prefers_facing_over_distance() {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_landmark(Point2D::new(50.0, 50.0), 0.0, false)
            .with_landmark(Point2D::new(60.0, 50.0), PI, false);
        let map = FieldMap::from_layout(&layout, DrishtiConfig::default()).unwrap();

        // (52, 50) is nearer the first target, but the estimate faces ~π
        let hit = map.nearest_target(Point2D::new(52.0, 50.0), -PI + 0.05).unwrap();
        assert_eq!(hit.position(), Point2D::new(60.0, 50.0));
    }

    #[test]
    fn test_gated_lookup_distance_gate() {
        let layout = FieldLayout::new(Point2D::new(200.0, 200.0))
            .with_landmark(Point2D::new(50.0, 50.0), 0.0, false);
        let map = FieldMap::from_layout(&layout, DrishtiConfig::default()).unwrap();

        assert!(map.nearest_target(Point2D::new(109.0, 50.0), 0.0).is_some());
        assert!(map.nearest_target(Point2D::new(110.0, 50.0), 0.0).is_none());
    }

    #[test]
    fn test_gated_lookup_rejects_non_finite_estimate() {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_landmark(Point2D::new(50.0, 50.0), 0.0, false);
        let map = FieldMap::from_layout(&layout, DrishtiConfig::default()).unwrap();
        let near = Point2D::new(51.0, 50.0);

        assert!(map.nearest_target(near, 0.1).is_some());
        for angle in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(map.nearest_target(near, angle).is_none(), "angle {}", angle);
        }
        assert!(map.nearest_target(Point2D::new(f32::NAN, 50.0), 0.1).is_none());
    }

    #[test]
    fn test_ungated_lookup_always_answers() {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_landmark(Point2D::new(10.0, 10.0), 0.0, false)
            .with_landmark(Point2D::new(90.0, 90.0), PI, false);
        let map = FieldMap::from_layout(&layout, DrishtiConfig::default()).unwrap();

        // Far from both, facing nonsense: still returns the argmin
        let hit = map
            .nearest_target_by_image(Point2D::new(80.0, 90.0), Point2D::new(5.0, 0.0))
            .unwrap();
        // Second target projects to (85, 90)
        assert_eq!(hit.position(), Point2D::new(90.0, 90.0));

        let empty = FieldMap::from_layout(
            &FieldLayout::new(Point2D::new(10.0, 10.0)),
            DrishtiConfig::default(),
        )
        .unwrap();
        assert!(empty.nearest_target_by_image(Point2D::ZERO, Point2D::ZERO).is_none());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0));
        let config = DrishtiConfig::default().with_robot_radius(-1.0);
        assert!(FieldMap::from_layout(&layout, config).is_err());
    }

    #[test]
    fn test_map_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldMap>();
    }
}
