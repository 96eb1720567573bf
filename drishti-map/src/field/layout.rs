//! Injected field layout: bounds, obstacles and landmarks as data.
//!
//! A competition field is usually symmetric, so a layout lists one half (or
//! one quarter) and asks for reflections:
//!
//! 1. every entry with `mirror_y: true` gains a copy flipped across
//!    `y = symmetry.reflect_y`
//! 2. if `symmetry.reflect_x` is set, the whole list (after step 1) is
//!    duplicated by flipping across `x = symmetry.reflect_x`
//!
//! ```yaml
//! bounds: {x: 648.0, y: 324.0}
//! symmetry:
//!   reflect_y: 162.0
//!   reflect_x: 324.0
//! obstacles:
//!   - vertices: [{x: 0, y: 71.4}, {x: 47.75, y: 71.4}, {x: 47.75, y: 250.6}, {x: 0, y: 250.6}]
//! landmarks:
//!   - position: {x: 0.0, y: 25.7}
//!     angle: 0.0
//!     mirror_y: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::landmark::VisionTarget;
use crate::core::Point2D;
use crate::error::{DrishtiError, Result};
use crate::geometry::Polygon;

/// One obstacle polygon in the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    /// Polygon vertices in order
    pub vertices: Vec<Point2D>,
    /// Also add the copy mirrored across `symmetry.reflect_y`
    #[serde(default)]
    pub mirror_y: bool,
}

/// One landmark in the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSpec {
    /// Landmark position
    pub position: Point2D,
    /// Facing angle in radians
    pub angle: f32,
    /// Rotationally ambiguous target
    #[serde(default)]
    pub symmetric: bool,
    /// Also add the copy mirrored across `symmetry.reflect_y`
    #[serde(default)]
    pub mirror_y: bool,
}

/// Reflection lines used to complete a symmetric field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Symmetry {
    /// Horizontal line for per-entry `mirror_y` copies
    #[serde(default)]
    pub reflect_y: Option<f32>,
    /// Vertical line; when set, the whole field is duplicated across it
    #[serde(default)]
    pub reflect_x: Option<f32>,
}

/// Complete description of a playing field.
///
/// `bounds` is the field extent measured from the origin; `bounds.x` is the
/// field's long axis (its height in the rulebook) and `bounds.y` its width.
/// Keep the same axis order for the boundary polygon and every coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// Field extent (long axis, short axis)
    pub bounds: Point2D,
    /// Explicit wall polygon; defaults to the bounds rectangle
    #[serde(default)]
    pub boundary: Option<Vec<Point2D>>,
    /// Obstacle polygons
    #[serde(default)]
    pub obstacles: Vec<ObstacleSpec>,
    /// Vision targets
    #[serde(default)]
    pub landmarks: Vec<LandmarkSpec>,
    /// Reflections completing the field
    #[serde(default)]
    pub symmetry: Symmetry,
}

/// Layout with symmetry applied and every polygon validated.
#[derive(Clone, Debug)]
pub(crate) struct ResolvedLayout {
    pub bounds: Point2D,
    pub boundary: Polygon,
    pub obstacles: Vec<Polygon>,
    pub landmarks: Vec<VisionTarget>,
}

impl FieldLayout {
    /// Empty rectangular field of the given extent.
    pub fn new(bounds: Point2D) -> Self {
        Self {
            bounds,
            boundary: None,
            obstacles: Vec::new(),
            landmarks: Vec::new(),
            symmetry: Symmetry::default(),
        }
    }

    /// Load a layout from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a layout from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Builder: add an obstacle polygon.
    pub fn with_obstacle(mut self, vertices: Vec<Point2D>) -> Self {
        self.obstacles.push(ObstacleSpec {
            vertices,
            mirror_y: false,
        });
        self
    }

    /// Builder: add an axis-aligned rectangular obstacle.
    pub fn with_rect_obstacle(self, min: Point2D, max: Point2D) -> Self {
        let vertices = Polygon::rectangle(min, max).vertices().to_vec();
        self.with_obstacle(vertices)
    }

    /// Builder: add a landmark.
    pub fn with_landmark(mut self, position: Point2D, angle: f32, symmetric: bool) -> Self {
        self.landmarks.push(LandmarkSpec {
            position,
            angle,
            symmetric,
            mirror_y: false,
        });
        self
    }

    /// Builder: set the reflection lines.
    pub fn with_symmetry(mut self, reflect_y: Option<f32>, reflect_x: Option<f32>) -> Self {
        self.symmetry = Symmetry {
            reflect_y,
            reflect_x,
        };
        self
    }

    /// Validate and expand into concrete polygons and targets.
    pub(crate) fn resolve(&self) -> Result<ResolvedLayout> {
        let bounds = self.bounds;
        if !(bounds.x.is_finite() && bounds.y.is_finite() && bounds.x > 0.0 && bounds.y > 0.0) {
            return Err(DrishtiError::InvalidBounds {
                x: bounds.x,
                y: bounds.y,
            });
        }

        let boundary = match &self.boundary {
            Some(vertices) => polygon_with_context(vertices.clone(), "boundary".to_string())?,
            None => Polygon::rectangle(Point2D::ZERO, bounds),
        };

        let wants_mirror_y = self.obstacles.iter().any(|o| o.mirror_y)
            || self.landmarks.iter().any(|l| l.mirror_y);
        let reflect_y = match (self.symmetry.reflect_y, wants_mirror_y) {
            (Some(axis), _) => Some(axis),
            (None, true) => {
                return Err(DrishtiError::Config(
                    "mirror_y entries need symmetry.reflect_y".to_string(),
                ));
            }
            (None, false) => None,
        };

        let mut obstacles = Vec::with_capacity(self.obstacles.len() * 2);
        for (i, spec) in self.obstacles.iter().enumerate() {
            let polygon = polygon_with_context(spec.vertices.clone(), format!("obstacle {}", i))?;
            let mirrored = match reflect_y {
                Some(axis) if spec.mirror_y => Some(polygon.flip_y(axis)),
                _ => None,
            };
            obstacles.push(polygon);
            obstacles.extend(mirrored);
        }

        let mut landmarks = Vec::with_capacity(self.landmarks.len() * 2);
        for spec in &self.landmarks {
            if !spec.position.is_finite() || !spec.angle.is_finite() {
                return Err(DrishtiError::Config(format!(
                    "landmark at {} has a non-finite coordinate",
                    spec.position
                )));
            }
            let target = VisionTarget::new(spec.position, spec.angle, spec.symmetric);
            landmarks.push(target);
            if let Some(axis) = reflect_y.filter(|_| spec.mirror_y) {
                landmarks.push(target.flip_y(axis));
            }
        }

        if let Some(axis) = self.symmetry.reflect_x {
            let far_obstacles: Vec<Polygon> = obstacles.iter().map(|p| p.flip_x(axis)).collect();
            obstacles.extend(far_obstacles);
            let far_landmarks: Vec<VisionTarget> =
                landmarks.iter().map(|t| t.flip_x(axis)).collect();
            landmarks.extend(far_landmarks);
        }

        Ok(ResolvedLayout {
            bounds,
            boundary,
            obstacles,
            landmarks,
        })
    }
}

fn polygon_with_context(vertices: Vec<Point2D>, context: String) -> Result<Polygon> {
    let count = vertices.len();
    Polygon::new(vertices).map_err(|_| DrishtiError::InvalidPolygon {
        context,
        vertices: count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_boundary_is_bounds_rectangle() {
        let resolved = FieldLayout::new(Point2D::new(100.0, 50.0)).resolve().unwrap();
        assert_eq!(
            resolved.boundary.vertices(),
            &[
                Point2D::new(0.0, 0.0),
                Point2D::new(100.0, 0.0),
                Point2D::new(100.0, 50.0),
                Point2D::new(0.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_rejects_bad_bounds() {
        let err = FieldLayout::new(Point2D::new(0.0, 50.0)).resolve().unwrap_err();
        assert!(matches!(err, DrishtiError::InvalidBounds { .. }));
    }

    #[test]
    fn test_rejects_short_obstacle() {
        let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_obstacle(vec![Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0)]);
        match layout.resolve().unwrap_err() {
            DrishtiError::InvalidPolygon { context, vertices } => {
                assert_eq!(context, "obstacle 0");
                assert_eq!(vertices, 2);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_mirror_without_axis_is_error() {
        let mut layout = FieldLayout::new(Point2D::new(100.0, 100.0))
            .with_rect_obstacle(Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0));
        layout.obstacles[0].mirror_y = true;
        assert!(matches!(layout.resolve(), Err(DrishtiError::Config(_))));
    }

    #[test]
    fn test_symmetry_expansion_order() {
        let mut layout = FieldLayout::new(Point2D::new(200.0, 100.0))
            .with_rect_obstacle(Point2D::new(10.0, 10.0), Point2D::new(20.0, 20.0))
            .with_landmark(Point2D::new(0.0, 25.0), 0.0, false)
            .with_landmark(Point2D::new(50.0, 40.0), -FRAC_PI_2, true)
            .with_symmetry(Some(50.0), Some(100.0));
        layout.obstacles[0].mirror_y = true;
        layout.landmarks[0].mirror_y = true;

        let resolved = layout.resolve().unwrap();
        // 1 obstacle -> 2 with mirror_y -> 4 with reflect_x
        assert_eq!(resolved.obstacles.len(), 4);
        // 2 landmarks -> 3 with mirror_y -> 6 with reflect_x
        assert_eq!(resolved.landmarks.len(), 6);

        assert_eq!(resolved.landmarks[1].position(), Point2D::new(0.0, 75.0));
        assert_eq!(resolved.landmarks[3].position(), Point2D::new(200.0, 25.0));
        assert_relative_eq!(resolved.landmarks[3].angle(), PI, epsilon = 1e-6);
        assert_eq!(resolved.landmarks[5].position(), Point2D::new(150.0, 40.0));
        assert!(resolved.landmarks[5].symmetric);

        assert_eq!(resolved.obstacles[1].aabb().min, Point2D::new(10.0, 80.0));
        assert_eq!(resolved.obstacles[2].aabb().min, Point2D::new(180.0, 10.0));
    }

    #[test]
    fn test_yaml_layout() {
        let yaml = r#"
bounds: {x: 168.0, y: 168.0}
obstacles:
  - vertices: [{x: 48, y: 72}, {x: 48, y: 96}, {x: 120, y: 96}, {x: 120, y: 72}]
landmarks:
  - position: {x: 96, y: 151}
    angle: -1.5707964
"#;
        let layout = FieldLayout::from_yaml_str(yaml).unwrap();
        assert_eq!(layout.obstacles.len(), 1);
        assert!(!layout.landmarks[0].symmetric);
        let resolved = layout.resolve().unwrap();
        assert_relative_eq!(resolved.landmarks[0].angle(), -FRAC_PI_2, epsilon = 1e-6);
    }
}
