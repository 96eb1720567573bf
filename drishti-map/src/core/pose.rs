//! Position plus heading, for the robot, the camera mount and landmarks.

use serde::{Deserialize, Serialize};

use super::math::{angles_approx_equal, normalize_angle};
use super::point::Point2D;

/// A placement in the plane.
///
/// `theta` is in radians, counter-clockwise from +X, and always normalized to
/// (-π, π] by the constructors. For a landmark it is the facing direction; for
/// the camera it is the yaw relative to the robot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    pub x: f32,
    pub y: f32,
    pub theta: f32,
}

impl Pose2D {
    /// Pose at `(x, y)` with heading `theta`, normalized.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    #[inline]
    pub fn from_position_angle(position: Point2D, theta: f32) -> Self {
        Self::new(position.x, position.y, theta)
    }

    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Map a point from this pose's frame into the enclosing frame.
    ///
    /// Chaining two calls carries a camera-frame point through the robot
    /// frame onto the field.
    ///
    /// ```
    /// use drishti_map::core::{Point2D, Pose2D};
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let robot = Pose2D::new(10.0, 0.0, FRAC_PI_2);
    /// let field = robot.transform_point(Point2D::new(2.0, 0.0));
    /// assert!((field.x - 10.0).abs() < 1e-5);
    /// assert!((field.y - 2.0).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn transform_point(self, local: Point2D) -> Point2D {
        self.position() + local.rotate(self.theta)
    }

    /// Same position within `pos_epsilon` per axis and heading within
    /// `angle_epsilon`, across the ±π seam.
    pub fn approx_eq(self, other: Pose2D, pos_epsilon: f32, angle_epsilon: f32) -> bool {
        (self.x - other.x).abs() <= pos_epsilon
            && (self.y - other.y).abs() <= pos_epsilon
            && angles_approx_equal(self.theta, other.theta, angle_epsilon)
    }
}
