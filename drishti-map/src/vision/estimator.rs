//! Pose correction from landmark sightings.
//!
//! Dead reckoning drifts. When the camera sees a landmark, the sighting is
//! projected onto the field using the drifted pose, matched against the known
//! landmarks, and the offset between the known and projected positions is
//! the drift to remove.
//!
//! ```text
//! sample (camera frame)
//!     │  mount pose
//!     ▼
//! robot frame ──heading, dead-reckoned position──▶ coarse landmark pose
//!                                                      │ gated lookup
//!                                                      ▼
//!                              known landmark ──▶ corrected robot pose
//! ```

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use super::sample::{DetectionMailbox, DetectionSample};
use crate::core::{Point2D, Pose2D};
use crate::field::FieldMap;

/// Where the camera sits on the robot.
///
/// `position` is in the robot frame (+X forward); `angle` is the camera's
/// yaw relative to the robot heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraMount {
    /// Camera position in the robot frame
    pub position: Point2D,
    /// Camera yaw relative to the robot (radians)
    pub angle: f32,
}

impl CameraMount {
    /// Create a mount.
    pub fn new(position: Point2D, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Mount as a pose in the robot frame.
    #[inline]
    pub fn pose(&self) -> Pose2D {
        Pose2D::from_position_angle(self.position, self.angle)
    }

    /// Camera-frame point expressed in the robot frame.
    #[inline]
    pub fn to_robot(&self, camera_point: Point2D) -> Point2D {
        self.pose().transform_point(camera_point)
    }
}

/// Corrects a dead-reckoned pose from camera landmark sightings.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisionPoseEstimator {
    mount: CameraMount,
}

impl VisionPoseEstimator {
    /// Create an estimator for a camera at `mount`.
    pub fn new(mount: CameraMount) -> Self {
        Self { mount }
    }

    /// Camera mount in use.
    pub fn mount(&self) -> CameraMount {
        self.mount
    }

    /// Corrected pose from the mailbox's latest sample.
    ///
    /// `None` if no sample was ever received, the latest is older than
    /// `max_age_us`, or it matches no landmark.
    pub fn estimate(
        &self,
        field: &FieldMap,
        mailbox: &DetectionMailbox,
        heading: f32,
        position: Point2D,
        now_us: u64,
        max_age_us: u64,
    ) -> Option<Pose2D> {
        let Some(sample) = mailbox.fresh(now_us, max_age_us) else {
            match mailbox.latest() {
                Some(stale) => log::debug!(
                    "Detection sample stale: {}us old, limit {}us",
                    stale.age_us(now_us),
                    max_age_us
                ),
                None => log::debug!("No detection sample received yet"),
            }
            return None;
        };
        self.correct(field, &sample.data, heading, position)
    }

    /// Where the sighted landmark would be, and which way it would face, if
    /// the dead-reckoned pose were exact.
    pub fn coarse_landmark(
        &self,
        sample: &DetectionSample,
        heading: f32,
        position: Point2D,
    ) -> Pose2D {
        let robot = Pose2D::from_position_angle(position, heading);
        let landmark = robot.transform_point(self.mount.to_robot(sample.displacement()));
        Pose2D::from_position_angle(landmark, heading + sample.yaw + self.mount.angle + PI)
    }

    /// Corrected pose for one sample, skipping the staleness check.
    pub fn correct(
        &self,
        field: &FieldMap,
        sample: &DetectionSample,
        heading: f32,
        position: Point2D,
    ) -> Option<Pose2D> {
        let coarse = self.coarse_landmark(sample, heading, position);
        let Some(target) = field.nearest_target(coarse.position(), coarse.theta) else {
            log::debug!(
                "No landmark within gates of {} facing {:.1}°",
                coarse.position(),
                coarse.theta.to_degrees()
            );
            return None;
        };

        let corrected_heading = -sample.yaw + PI + target.angle() - self.mount.angle;
        let drift = target.position() - coarse.position();
        let corrected = Pose2D::from_position_angle(position + drift, corrected_heading);

        log::debug!(
            "Vision correction: landmark {} drift {} heading {:.1}° -> {:.1}°",
            target.position(),
            drift,
            heading.to_degrees(),
            corrected.theta.to_degrees()
        );
        Some(corrected)
    }
}
