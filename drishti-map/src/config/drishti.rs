//! Main DrishtiConfig, loading and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::sections::{MatchingSection, NodeSection, RobotSection};
use crate::error::{DrishtiError, Result};

/// Default config location, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full drishti-map configuration loaded from YAML
///
/// ```rust
/// use drishti_map::DrishtiConfig;
///
/// let config = DrishtiConfig::from_yaml_str("robot:\n  radius: 5.0\n").unwrap();
/// assert_eq!(config.robot.radius, 5.0);
/// assert_eq!(config.nodes.clearance, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Robot footprint
    #[serde(default)]
    pub robot: RobotSection,

    /// Waypoint node generation
    #[serde(default)]
    pub nodes: NodeSection,

    /// Landmark matching gates
    #[serde(default)]
    pub matching: MatchingSection,
}

impl DrishtiConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: DrishtiConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `configs/drishti.yaml`, or defaults if the file is absent
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::from_yaml_file(path)
        } else {
            log::debug!("{} not found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Check that every parameter is finite and in range.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("robot.radius", self.robot.radius),
            ("nodes.clearance", self.nodes.clearance),
            ("nodes.safety_margin", self.nodes.safety_margin),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(DrishtiError::Config(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("matching.angular_gate", self.matching.angular_gate),
            ("matching.distance_gate_sq", self.matching.distance_gate_sq),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(DrishtiError::Config(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Radius at which corner nodes are placed: robot radius plus clearance.
    #[inline]
    pub fn node_radius(&self) -> f32 {
        self.robot.radius + self.nodes.clearance
    }

    /// Radius of the circle a node must keep clear: placement radius plus margin.
    #[inline]
    pub fn node_check_radius(&self) -> f32 {
        self.node_radius() + self.nodes.safety_margin
    }

    /// Builder-style setter for robot radius.
    pub fn with_robot_radius(mut self, radius: f32) -> Self {
        self.robot.radius = radius;
        self
    }

    /// Builder-style setter for node clearance.
    pub fn with_node_clearance(mut self, clearance: f32) -> Self {
        self.nodes.clearance = clearance;
        self
    }

    /// Builder-style setter for node safety margin.
    pub fn with_node_safety_margin(mut self, margin: f32) -> Self {
        self.nodes.safety_margin = margin;
        self
    }

    /// Builder-style setter for the angular gate (radians).
    pub fn with_angular_gate(mut self, gate: f32) -> Self {
        self.matching.angular_gate = gate;
        self
    }

    /// Builder-style setter for the squared distance gate.
    pub fn with_distance_gate_sq(mut self, gate_sq: f32) -> Self {
        self.matching.distance_gate_sq = gate_sq;
        self
    }
}
