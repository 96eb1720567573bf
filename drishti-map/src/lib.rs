//! # Drishti-Map: Field Geometry and Landmark Localization
//!
//! Collision, visibility and drift-correction queries for a mobile robot on a
//! fixed, known playing field.
//!
//! ## Features
//!
//! - **Capsule line of sight**: can a disc-shaped robot drive straight from A to B?
//! - **Waypoint nodes**: clearance points around every obstacle corner for a planner
//! - **Landmark matching**: gated nearest-landmark lookup by position and facing
//! - **Pose correction**: removes dead-reckoning drift from camera sightings
//! - **Injected layouts**: fields load from YAML, with reflection symmetry
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti_map::{DrishtiConfig, FieldLayout, FieldMap};
//! use drishti_map::core::Point2D;
//!
//! let layout = FieldLayout::new(Point2D::new(100.0, 100.0))
//!     .with_rect_obstacle(Point2D::new(40.0, 40.0), Point2D::new(60.0, 60.0));
//! let config = DrishtiConfig::default().with_robot_radius(5.0);
//! let map = FieldMap::from_layout(&layout, config).unwrap();
//!
//! assert!(!map.line_of_sight(Point2D::new(10.0, 50.0), Point2D::new(90.0, 50.0)));
//! assert!(map.line_of_sight(Point2D::new(10.0, 10.0), Point2D::new(10.0, 90.0)));
//! assert_eq!(map.generate_nodes().len(), 4);
//! ```
//!
//! ## Coordinate Frame
//!
//! - Field origin at one corner; `bounds` is the extent from the origin
//! - Angles in radians, counter-clockwise positive, normalized to (-π, π]
//! - Camera and robot frames look along +X
//!
//! ## Data Flow
//!
//! ```text
//!   FieldLayout (YAML) ──┐
//!                        ├──► FieldMap ──► line_of_sight / generate_nodes
//!   DrishtiConfig ───────┘        │
//!                                 │ nearest_target
//!   sensor thread                 ▼
//!   ──► DetectionMailbox ──► VisionPoseEstimator ──► corrected Pose2D
//!                               ▲
//!        dead-reckoned pose ────┘
//! ```
//!
//! A built [`FieldMap`] is read-only and `Send + Sync`; share it with
//! `Arc` between the control loop and any planner threads.

pub mod config;
pub mod core;
pub mod error;
pub mod field;
pub mod geometry;
pub mod vision;

pub use config::DrishtiConfig;
pub use error::{DrishtiError, Result};
pub use field::{FieldLayout, FieldMap, NodeSet, VisionTarget};
pub use geometry::{Circle, Polygon, Shape};
pub use vision::{CameraMount, DetectionMailbox, DetectionSample, VisionPoseEstimator};
