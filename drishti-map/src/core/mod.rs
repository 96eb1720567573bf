//! Core value types for drishti-map.
//!
//! - [`Point2D`]: field position or displacement
//! - [`Pose2D`]: position plus heading
//! - [`Timestamped`]: receipt-time wrapper for sensor samples
//! - [`math`]: angle normalization and signed angle difference

pub mod math;
mod point;
mod pose;
mod timestamped;

pub use math::{angle_diff, angles_approx_equal, normalize_angle};
pub use point::Point2D;
pub use pose::Pose2D;
pub use timestamped::Timestamped;
