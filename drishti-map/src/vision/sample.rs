//! Camera detection samples and the latest-sample mailbox.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Timestamped};

/// One landmark observation, in the camera frame.
///
/// The camera looks along its own +X axis. `depth` is the distance along the
/// optical axis, `lateral` the sideways offset, and `yaw` the target's
/// rotation about the vertical axis as seen by the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionSample {
    /// Forward translation along the camera axis
    pub depth: f32,
    /// Sideways translation (positive = left of the camera axis)
    pub lateral: f32,
    /// Target rotation about the vertical axis (radians)
    pub yaw: f32,
}

impl DetectionSample {
    /// Create a sample.
    pub fn new(depth: f32, lateral: f32, yaw: f32) -> Self {
        Self {
            depth,
            lateral,
            yaw,
        }
    }

    /// Planar translation in the camera frame.
    #[inline]
    pub fn displacement(&self) -> Point2D {
        Point2D::new(self.depth, self.lateral)
    }
}

/// Single-slot, latest-wins holder for detection samples.
///
/// Written by the sensor receiver thread, read by the control loop. A new
/// sample overwrites the previous one; nothing is queued. Empty until the
/// first sample arrives.
#[derive(Debug, Default)]
pub struct DetectionMailbox {
    slot: Mutex<Option<Timestamped<DetectionSample>>>,
}

impl DetectionMailbox {
    /// Create an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sample received at `timestamp_us`, replacing any previous one.
    pub fn publish(&self, sample: DetectionSample, timestamp_us: u64) {
        *self.slot.lock() = Some(Timestamped::new(sample, timestamp_us));
    }

    /// Most recent sample, if any has been received.
    pub fn latest(&self) -> Option<Timestamped<DetectionSample>> {
        *self.slot.lock()
    }

    /// Most recent sample if it is no older than `max_age_us` at `now_us`.
    pub fn fresh(&self, now_us: u64, max_age_us: u64) -> Option<Timestamped<DetectionSample>> {
        self.latest()
            .filter(|sample| !sample.is_stale(now_us, max_age_us))
    }

    /// Drop the held sample, returning the mailbox to its empty state.
    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}
