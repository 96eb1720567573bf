//! Deduplicated waypoint set produced by node generation.
//!
//! Nodes are compared by exact coordinate value. Two obstacles sharing a
//! corner produce bit-identical candidates and collapse to one entry;
//! candidates that differ by floating-point noise are kept as distinct
//! waypoints.

use std::collections::HashSet;

use crate::core::Point2D;

/// Exact-equality key for a node position.
///
/// `-0.0` and `0.0` map to the same key; NaN never reaches a key because
/// node generation only emits finite coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeKey {
    x_bits: u32,
    y_bits: u32,
}

impl NodeKey {
    /// Key for a point.
    #[inline]
    pub fn new(point: Point2D) -> Self {
        Self {
            x_bits: canonical_bits(point.x),
            y_bits: canonical_bits(point.y),
        }
    }

    /// Point this key was built from.
    #[inline]
    pub fn point(&self) -> Point2D {
        Point2D::new(f32::from_bits(self.x_bits), f32::from_bits(self.y_bits))
    }
}

impl From<Point2D> for NodeKey {
    fn from(point: Point2D) -> Self {
        Self::new(point)
    }
}

#[inline]
fn canonical_bits(value: f32) -> u32 {
    // Adding zero turns -0.0 into +0.0 and leaves everything else unchanged
    (value + 0.0).to_bits()
}

/// Insertion-ordered set of waypoints.
#[derive(Clone, Debug, Default)]
pub struct NodeSet {
    seen: HashSet<NodeKey>,
    nodes: Vec<Point2D>,
}

impl NodeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node; returns false if an identical node is already present.
    pub fn insert(&mut self, point: Point2D) -> bool {
        if self.seen.insert(NodeKey::new(point)) {
            self.nodes.push(point);
            true
        } else {
            false
        }
    }

    /// Check whether a node with exactly these coordinates is present.
    pub fn contains(&self, point: Point2D) -> bool {
        self.seen.contains(&NodeKey::new(point))
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no node survived generation.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.nodes.iter()
    }

    /// Consume into the ordered node list.
    pub fn into_vec(self) -> Vec<Point2D> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
