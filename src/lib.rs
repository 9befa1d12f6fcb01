//! # Marga-Plan: Visibility-Graph Path Planner
//!
//! A 2D shortest-path planner that computes collision-free routes between
//! a start and a goal point among static polygonal obstacles, using
//! visibility-graph construction plus A* search.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_plan::PathPlanner;
//!
//! // Map text: start, goal, then one polygon per line
//! let map = "0,0\n10,0\n4,-2;4,2;6,2;6,-2\n";
//! let planner = PathPlanner::from_map_str(map, Default::default()).unwrap();
//!
//! let path = planner.solution();
//! println!("{} waypoints, {:.2} units", path.points.len(), path.length);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Geometry primitives ([`core::Point2D`], [`core::Segment2D`])
//! - [`visibility`]: Visibility graph construction over obstacle corners
//! - [`pathfinding`]: A* search over the visibility graph
//! - [`io`]: Line-oriented text map format
//! - [`config`]: YAML-backed planner settings
//! - [`planner`]: [`PathPlanner`], the owner of a whole problem instance
//! - [`viz`]: Read-only snapshots and SVG rendering for debugging
//!
//! ## Data Flow
//!
//! ```text
//! map text ──► io::parse_map ──► MapDescription
//!                                     │
//!                                     ▼
//!                            PathPlanner::from_description
//!                                     │ vertex arena + obstacle edges
//!                                     ▼
//!                            VisibilityGraph::build
//!                                     │ adjacency (line of sight)
//!                                     ▼
//!                              AStarSearch::find_path
//!                                     │ ordered waypoints
//!                                     ▼
//!                            Path / GraphSnapshot ──► viz::render_svg
//! ```
//!
//! The whole pipeline is single-threaded, synchronous and deterministic:
//! both graph construction and search run to completion over a fixed
//! snapshot of the map, with no I/O or yielding inside the algorithms.

pub mod config;
pub mod core;
pub mod io;
pub mod pathfinding;
pub mod planner;
pub mod visibility;
pub mod viz;

// Re-export main types at crate root
pub use config::PlannerSettings;
pub use crate::core::{Point2D, Segment2D};
pub use pathfinding::{PathFailure, PathResult};
pub use planner::{PathPlanner, PlannerError};
pub use visibility::VisibilityGraph;

/// A planned path through the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Waypoints along the path, start first.
    pub points: Vec<Point2D>,
    /// Total path length in plane units.
    pub length: f32,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
        }
    }

    /// Build a path from waypoints, deriving the total length.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        let length = points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum();
        Self { points, length }
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}
