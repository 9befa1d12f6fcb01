//! A* search types.

use std::cmp::Ordering;

use crate::core::Point2D;

/// Entry in the A* open-set priority queue.
///
/// Ordering is reversed on `f_cost` so `BinaryHeap` behaves as a min-heap,
/// with the insertion sequence number as the tie-break. That makes the
/// expansion order a deterministic function of the input, which keeps
/// test fixtures reproducible.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    /// Vertex index in the graph arena.
    pub index: usize,
    /// Cost from start (g-value) at push time.
    pub g_cost: f32,
    /// g_cost + heuristic (f-value) at push time.
    pub f_cost: f32,
    /// Insertion sequence number, used as the tie-break.
    pub seq: u64,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.seq == other.seq
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier insertion wins ties
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search configuration.
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up.
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}

/// Result of an A* search.
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Path as vertex indices into the graph arena (empty if no path found).
    pub path_indices: Vec<usize>,
    /// Path as plane coordinates.
    pub path_points: Vec<Point2D>,
    /// Total path cost.
    pub cost: f32,
    /// Number of nodes expanded during search.
    pub nodes_expanded: usize,
    /// Whether a path was found.
    pub success: bool,
    /// Reason for failure (if any).
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result.
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path_indices: Vec::new(),
            path_points: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Number of waypoints on the path.
    pub fn len(&self) -> usize {
        self.path_indices.len()
    }

    /// True when no path was found.
    pub fn is_empty(&self) -> bool {
        self.path_indices.is_empty()
    }
}

/// Reason an A* search produced no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// No path exists between start and goal. This is a legitimate
    /// terminal outcome of the search, not an error.
    NoPath,
    /// Maximum iterations exceeded.
    MaxIterationsExceeded,
    /// Start or goal index is outside the vertex arena.
    OutOfBounds,
}
