//! Tunable parameters for field queries and landmark matching.
//!
//! Loads from a single YAML file; every field has a default, so an empty
//! document is a valid configuration.

mod defaults;
mod drishti;
mod sections;

pub use drishti::DrishtiConfig;
pub use sections::{MatchingSection, NodeSection, RobotSection};
