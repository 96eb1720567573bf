//! Fixed visual landmarks (vision targets) placed on the field.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::core::{Point2D, Pose2D};

/// A fixed, known visual fiducial.
///
/// `pose.theta` is the direction the target faces (the outward normal of the
/// surface it is mounted on), normalized to (-π, π].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisionTarget {
    /// Position and facing angle.
    pub pose: Pose2D,
    /// Target looks the same from both sides of its axis.
    ///
    /// Informational only; matching does not treat symmetric targets specially.
    pub symmetric: bool,
}

impl VisionTarget {
    /// Create a target at `position` facing `angle` radians.
    pub fn new(position: Point2D, angle: f32, symmetric: bool) -> Self {
        Self {
            pose: Pose2D::from_position_angle(position, angle),
            symmetric,
        }
    }

    /// Position on the field.
    #[inline]
    pub fn position(&self) -> Point2D {
        self.pose.position()
    }

    /// Facing angle in (-π, π].
    #[inline]
    pub fn angle(&self) -> f32 {
        self.pose.theta
    }

    /// Mirror across the vertical line `x = axis`.
    ///
    /// A target facing +X ends up facing -X, so the angle maps to `π - angle`.
    pub fn flip_x(&self, axis: f32) -> Self {
        Self {
            pose: Pose2D::from_position_angle(self.position().flip_x(axis), PI - self.angle()),
            symmetric: self.symmetric,
        }
    }

    /// Mirror across the horizontal line `y = axis`; the angle maps to `-angle`.
    pub fn flip_y(&self, axis: f32) -> Self {
        Self {
            pose: Pose2D::from_position_angle(self.position().flip_y(axis), -self.angle()),
            symmetric: self.symmetric,
        }
    }

    /// Where the target would appear if seen at `image_displacement`, expressed
    /// in the target's own frame.
    #[inline]
    pub fn project(&self, image_displacement: Point2D) -> Point2D {
        self.position() + image_displacement.rotate(self.angle())
    }

    /// Facing angle in degrees, in [0, 360). Handy for log output.
    pub fn angle_degrees(&self) -> f32 {
        self.angle().to_degrees().rem_euclid(360.0)
    }
}
