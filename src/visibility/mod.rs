//! Visibility graph construction.
//!
//! Determines, for every pair of vertices, whether the straight segment
//! between them is unobstructed: no obstacle edge crosses it and it does
//! not run through an obstacle polygon's interior.

mod graph;
mod occlusion;

pub use graph::VisibilityGraph;
pub use occlusion::{is_occluded, min_distance_to_edges, point_in_polygon};
