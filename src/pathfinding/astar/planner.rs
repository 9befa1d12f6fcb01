//! A* search over a visibility graph.

use log::{debug, trace};
use std::collections::BinaryHeap;

use crate::visibility::VisibilityGraph;

use super::types::{AStarConfig, OpenEntry, PathFailure, PathResult};

/// A* searcher borrowing a solved visibility graph.
pub struct AStarSearch<'a> {
    graph: &'a VisibilityGraph,
    config: AStarConfig,
}

/// Per-solve scratch state, keyed by vertex index.
///
/// Search fields live here rather than on the shared vertex records, so a
/// graph can be searched repeatedly without stale g/f/predecessor values
/// leaking between solves. Predecessors are plain indices into the arena;
/// the graph stays the sole owner of vertex lifetime.
struct SearchScratch {
    g: Vec<f32>,
    f: Vec<f32>,
    predecessor: Vec<Option<usize>>,
    closed: Vec<bool>,
    in_open: Vec<bool>,
}

impl SearchScratch {
    fn new(n: usize) -> Self {
        Self {
            g: vec![f32::INFINITY; n],
            f: vec![f32::INFINITY; n],
            predecessor: vec![None; n],
            closed: vec![false; n],
            in_open: vec![false; n],
        }
    }
}

impl<'a> AStarSearch<'a> {
    /// Create a new searcher over the given graph.
    pub fn new(graph: &'a VisibilityGraph, config: AStarConfig) -> Self {
        Self { graph, config }
    }

    /// Create with default configuration.
    pub fn with_defaults(graph: &'a VisibilityGraph) -> Self {
        Self::new(graph, AStarConfig::default())
    }

    /// Find a minimum-cost path between two vertex indices.
    ///
    /// The heuristic is straight-line Euclidean distance to the goal,
    /// which is admissible and consistent for this metric, so the
    /// returned path is optimal. An exhausted frontier yields a
    /// `NoPath` result with an empty path; callers must check
    /// [`PathResult::success`] rather than treat that as an error.
    pub fn find_path(&self, start: usize, goal: usize) -> PathResult {
        let n = self.graph.vertex_count();
        trace!("[AStar] find_path: start={} goal={} vertices={}", start, goal, n);

        if start >= n || goal >= n {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside arena");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        let goal_point = self.graph.vertex(goal);
        let mut scratch = SearchScratch::new(n);
        let mut open = BinaryHeap::new();
        let mut seq: u64 = 0;

        // Invariant at every push: f == g + heuristic(node, goal)
        scratch.g[start] = 0.0;
        scratch.f[start] = self.graph.vertex(start).distance(goal_point);
        scratch.in_open[start] = true;
        open.push(OpenEntry {
            index: start,
            g_cost: 0.0,
            f_cost: scratch.f[start],
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open.pop() {
            // Stale entry: a better path to this vertex was pushed later
            if current.g_cost > scratch.g[current.index] {
                continue;
            }

            if current.index == goal {
                return self.reconstruct_path(&scratch, goal, nodes_expanded);
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            scratch.in_open[current.index] = false;
            scratch.closed[current.index] = true;
            let current_point = self.graph.vertex(current.index);

            for &neighbor in self.graph.neighbors(current.index) {
                let neighbor_point = self.graph.vertex(neighbor);
                let tentative_g =
                    scratch.g[current.index] + current_point.distance(neighbor_point);
                let tentative_f = tentative_g + neighbor_point.distance(goal_point);

                // Closed nodes are only reconsidered on a strict improvement
                if scratch.closed[neighbor] && tentative_f >= scratch.f[neighbor] {
                    continue;
                }

                if !scratch.in_open[neighbor] || tentative_f < scratch.f[neighbor] {
                    scratch.predecessor[neighbor] = Some(current.index);
                    scratch.g[neighbor] = tentative_g;
                    scratch.f[neighbor] = tentative_f;
                    scratch.closed[neighbor] = false;
                    scratch.in_open[neighbor] = true;

                    seq += 1;
                    open.push(OpenEntry {
                        index: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_f,
                        seq,
                    });
                }
            }
        }

        debug!("[AStar] FAILED: NoPath after expanding {} nodes", nodes_expanded);
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Reconstruct the path by walking predecessor links back from goal.
    fn reconstruct_path(
        &self,
        scratch: &SearchScratch,
        goal: usize,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path_indices = Vec::new();
        let mut current = goal;

        path_indices.push(current);
        while let Some(prev) = scratch.predecessor[current] {
            path_indices.push(prev);
            current = prev;
        }
        path_indices.reverse();

        let path_points = path_indices
            .iter()
            .map(|&i| self.graph.vertex(i))
            .collect();

        trace!(
            "[AStar] SUCCESS: path length={} waypoints, cost={:.3}, nodes_expanded={}",
            path_indices.len(),
            scratch.g[goal],
            nodes_expanded
        );

        PathResult {
            path_indices,
            path_points,
            cost: scratch.g[goal],
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point2D, Segment2D};

    const EPS: f32 = 1e-6;

    fn build_graph(vertices: Vec<Point2D>, obstacles: &[Segment2D]) -> VisibilityGraph {
        let mut graph = VisibilityGraph::new(vertices);
        graph.build(obstacles, &[], EPS);
        graph
    }

    #[test]
    fn test_direct_path_no_obstacles() {
        let graph = build_graph(
            vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)],
            &[],
        );
        let search = AStarSearch::with_defaults(&graph);
        let result = search.find_path(0, 1);

        assert!(result.success);
        assert_eq!(result.path_indices, vec![0, 1]);
        assert!((result.cost - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = build_graph(vec![Point2D::new(1.0, 1.0)], &[]);
        let search = AStarSearch::with_defaults(&graph);
        let result = search.find_path(0, 0);

        assert!(result.success);
        assert_eq!(result.path_indices, vec![0]);
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_path_through_intermediate_vertex() {
        // Wall between start and goal, one corner vertex above it
        let wall = Segment2D::new(Point2D::new(5.0, -10.0), Point2D::new(5.0, 2.0));
        let graph = build_graph(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(5.0, 2.0),
            ],
            &[wall],
        );
        let search = AStarSearch::with_defaults(&graph);
        let result = search.find_path(0, 1);

        assert!(result.success);
        assert_eq!(result.path_indices, vec![0, 2, 1]);
        let expected = Point2D::new(0.0, 0.0).distance(Point2D::new(5.0, 2.0))
            + Point2D::new(5.0, 2.0).distance(Point2D::new(10.0, 0.0));
        assert!((result.cost - expected).abs() < 1e-4);
    }

    #[test]
    fn test_no_path() {
        // Start boxed in on all sides
        let cage: Vec<Segment2D> = {
            let corners = [
                Point2D::new(-1.0, -1.0),
                Point2D::new(-1.0, 1.0),
                Point2D::new(1.0, 1.0),
                Point2D::new(1.0, -1.0),
            ];
            (0..4)
                .map(|i| Segment2D::new(corners[i], corners[(i + 1) % 4]))
                .collect()
        };
        let graph = build_graph(
            vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)],
            &cage,
        );
        let search = AStarSearch::with_defaults(&graph);
        let result = search.find_path(0, 1);

        assert!(!result.success);
        assert!(result.is_empty());
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_out_of_bounds_indices() {
        let graph = build_graph(vec![Point2D::ZERO], &[]);
        let search = AStarSearch::with_defaults(&graph);

        let result = search.find_path(0, 5);
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));
    }

    #[test]
    fn test_iteration_cap() {
        // Goal only reachable via the wall corner, so at least two
        // expansions are required; cap at one
        let wall = Segment2D::new(Point2D::new(5.0, -10.0), Point2D::new(5.0, 2.0));
        let graph = build_graph(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(5.0, 2.0),
            ],
            &[wall],
        );
        let search = AStarSearch::new(&graph, AStarConfig { max_iterations: 1 });

        let result = search.find_path(0, 1);
        assert!(!result.success);
        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxIterationsExceeded)
        );
    }

    #[test]
    fn test_repeat_search_is_identical() {
        let wall = Segment2D::new(Point2D::new(5.0, -10.0), Point2D::new(5.0, 2.0));
        let graph = build_graph(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(5.0, 2.0),
            ],
            &[wall],
        );
        let search = AStarSearch::with_defaults(&graph);

        let first = search.find_path(0, 1);
        let second = search.find_path(0, 1);
        assert_eq!(first.path_indices, second.path_indices);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.nodes_expanded, second.nodes_expanded);
    }

    #[test]
    fn test_picks_shorter_of_two_detours() {
        // Wall with a short detour below and a long one above
        let wall = Segment2D::new(Point2D::new(5.0, -1.0), Point2D::new(5.0, 8.0));
        let graph = build_graph(
            vec![
                Point2D::new(0.0, 0.0),  // start
                Point2D::new(10.0, 0.0), // goal
                Point2D::new(5.0, 8.0),  // top of wall (long way)
                Point2D::new(5.0, -1.0), // bottom of wall (short way)
            ],
            &[wall],
        );
        let search = AStarSearch::with_defaults(&graph);
        let result = search.find_path(0, 1);

        assert!(result.success);
        assert_eq!(result.path_indices, vec![0, 3, 1]);
    }
}
