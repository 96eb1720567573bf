//! Configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Robot geometry settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSection {
    /// Radius of the disc modelling the robot footprint
    #[serde(default = "defaults::robot_radius")]
    pub radius: f32,
}

impl Default for RobotSection {
    fn default() -> Self {
        Self {
            radius: defaults::robot_radius(),
        }
    }
}

/// Waypoint node generation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSection {
    /// Extra clearance added to the robot radius when placing corner nodes
    #[serde(default = "defaults::node_clearance")]
    pub clearance: f32,

    /// Extra clearance added on top of the placement radius when validating a node
    #[serde(default = "defaults::node_safety_margin")]
    pub safety_margin: f32,
}

impl Default for NodeSection {
    fn default() -> Self {
        Self {
            clearance: defaults::node_clearance(),
            safety_margin: defaults::node_safety_margin(),
        }
    }
}

/// Landmark matching gates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchingSection {
    /// Maximum facing-angle deviation (radians); a landmark must be strictly inside
    #[serde(default = "defaults::angular_gate")]
    pub angular_gate: f32,

    /// Maximum squared planar distance; a landmark must be strictly inside
    #[serde(default = "defaults::distance_gate_sq")]
    pub distance_gate_sq: f32,
}

impl Default for MatchingSection {
    fn default() -> Self {
        Self {
            angular_gate: defaults::angular_gate(),
            distance_gate_sq: defaults::distance_gate_sq(),
        }
    }
}
