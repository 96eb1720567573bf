//! Error types for drishti-map
//!
//! Errors only arise while loading configuration or building a field map.
//! Queries on a built map are infallible and report "no result" with `Option`.

use thiserror::Error;

/// drishti-map error type
#[derive(Error, Debug)]
pub enum DrishtiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid polygon ({context}): {vertices} vertices, need at least 3 finite vertices")]
    InvalidPolygon { context: String, vertices: usize },

    #[error("Invalid field bounds {x} x {y}: both extents must be positive and finite")]
    InvalidBounds { x: f32, y: f32 },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DrishtiError>;
