//! Vision-based drift correction.
//!
//! - [`DetectionSample`]: one camera sighting of a landmark
//! - [`DetectionMailbox`]: latest-wins slot shared with the sensor thread
//! - [`CameraMount`]: camera placement on the robot
//! - [`VisionPoseEstimator`]: turns a fresh sighting into a corrected pose

mod estimator;
mod sample;

pub use estimator::{CameraMount, VisionPoseEstimator};
pub use sample::{DetectionMailbox, DetectionSample};
