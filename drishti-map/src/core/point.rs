//! 2D vector type, used both as a field position and as a free displacement.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in the field plane.
///
/// Units are whatever the field layout uses (the competition layouts are in
/// inches). The same type doubles as a position and as a free vector.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate (along the field's long axis)
    pub x: f32,
    /// Y coordinate (along the field's short axis)
    pub y: f32,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(&self, other: Point2D) -> f32 {
        self.distance_squared_to(other).sqrt()
    }

    /// Squared distance (avoids sqrt, use for comparisons)
    #[inline]
    pub fn distance_squared_to(&self, other: Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Rotate around the origin by `angle` radians (CCW positive).
    ///
    /// Moves a displacement from one reference frame into another.
    #[inline]
    pub fn rotate(&self, angle: f32) -> Point2D {
        let (sin_a, cos_a) = angle.sin_cos();
        Point2D::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Length (magnitude) as a vector from origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared length
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Normalize to unit length (zero vector stays zero)
    #[inline]
    pub fn normalize(&self) -> Point2D {
        let len = self.length();
        if len > 0.0 {
            Point2D::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Unit vector perpendicular to this one (rotated +90°).
    ///
    /// Used to offset a segment sideways into a rectangle. Zero stays zero.
    #[inline]
    pub fn normal(&self) -> Point2D {
        Point2D::new(-self.y, self.x).normalize()
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: Point2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: Point2D) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Mirror across the vertical line `x = axis`.
    #[inline]
    pub fn flip_x(&self, axis: f32) -> Point2D {
        Point2D::new(2.0 * axis - self.x, self.y)
    }

    /// Mirror across the horizontal line `y = axis`.
    #[inline]
    pub fn flip_y(&self, axis: f32) -> Point2D {
        Point2D::new(self.x, 2.0 * axis - self.y)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(&self, other: Point2D) -> Point2D {
        Point2D::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(&self, other: Point2D) -> Point2D {
        Point2D::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Both coordinates are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point2D {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point2D::new(x, y)
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
