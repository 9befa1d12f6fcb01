//! A* search over the visibility graph.
//!
//! Operates on three conceptual node sets: open (frontier ordered by
//! f-cost), closed (expanded), and unseen. Membership is tracked with
//! per-vertex flag arrays for O(1) checks, decoupled from the binary
//! heap's internal ordering.

mod planner;
mod types;

pub use planner::AStarSearch;
pub use types::{AStarConfig, PathFailure, PathResult};

use crate::visibility::VisibilityGraph;

/// Quick path search with default configuration.
pub fn find_path(graph: &VisibilityGraph, start: usize, goal: usize) -> PathResult {
    let search = AStarSearch::with_defaults(graph);
    search.find_path(start, goal)
}

/// Check whether any path exists between two vertices.
pub fn path_exists(graph: &VisibilityGraph, start: usize, goal: usize) -> bool {
    find_path(graph, start, goal).success
}
