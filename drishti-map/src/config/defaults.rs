//! Default value functions for serde deserialization.

/// Robot footprint radius (field units, inches for the competition layouts)
pub fn robot_radius() -> f32 {
    15.0
}

pub fn node_clearance() -> f32 {
    1.0
}

pub fn node_safety_margin() -> f32 {
    0.5
}

/// 20 degrees
pub fn angular_gate() -> f32 {
    20f32.to_radians()
}

/// 60 units, squared
pub fn distance_gate_sq() -> f32 {
    60.0 * 60.0
}
