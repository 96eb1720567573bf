//! The playing field: layout data, landmarks, and the queryable map.
//!
//! - [`FieldLayout`]: injected bounds, obstacles and landmarks (YAML or builder)
//! - [`FieldMap`]: immutable query layer (line of sight, landmark lookup, nodes)
//! - [`VisionTarget`]: a fixed landmark with a facing angle
//! - [`NodeSet`]: deduplicated waypoints from node generation

mod landmark;
mod layout;
mod map;
mod nodes;

pub use landmark::VisionTarget;
pub use layout::{FieldLayout, LandmarkSpec, ObstacleSpec, Symmetry};
pub use map::FieldMap;
pub use nodes::{NodeKey, NodeSet};
