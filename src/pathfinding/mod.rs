//! Path search algorithms.

pub mod astar;

pub use astar::{AStarConfig, AStarSearch, PathFailure, PathResult};
